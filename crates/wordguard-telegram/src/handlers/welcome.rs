use teloxide::{prelude::*, types::User};

use wordguard_core::{
    domain::{Member, MessageRef, UserId},
    welcome::welcome_members,
};

use crate::router::AppState;

pub async fn handle_new_members(
    msg: MessageRef,
    users: &[User],
    state: &AppState,
) -> ResponseResult<()> {
    let members: Vec<Member> = users
        .iter()
        .map(|u| Member {
            user_id: UserId(u.id.0 as i64),
            display_name: u.full_name(),
        })
        .collect();

    if let Err(e) = welcome_members(state.messenger.as_ref(), msg, &members).await {
        tracing::warn!(chat_id = msg.chat_id.0, error = %e, "failed to welcome new members");
    }
    Ok(())
}
