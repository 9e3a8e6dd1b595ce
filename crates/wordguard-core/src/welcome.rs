use crate::{
    domain::{Member, MessageRef},
    formatting::user_mention_html,
    messaging::port::MessagingPort,
    Result,
};

pub fn welcome_html(member: &Member) -> String {
    format!(
        "Welcome {}",
        user_mention_html(member.user_id, &member.display_name)
    )
}

/// Greet every member of a join event with its own reply to the service message.
///
/// Send errors are not caught here; the first one aborts the remaining greetings.
pub async fn welcome_members(
    messenger: &dyn MessagingPort,
    msg: MessageRef,
    members: &[Member],
) -> Result<()> {
    for member in members {
        messenger.reply_html(msg, &welcome_html(member)).await?;
        tracing::info!(
            chat_id = msg.chat_id.0,
            user_id = member.user_id.0,
            "welcomed new member"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChatId, MessageId, UserId};
    use crate::test_support::{FakeMessenger, Sent};

    fn join_msg() -> MessageRef {
        MessageRef {
            chat_id: ChatId(-5),
            message_id: MessageId(11),
        }
    }

    fn member(id: i64, name: &str) -> Member {
        Member {
            user_id: UserId(id),
            display_name: name.to_string(),
        }
    }

    #[test]
    fn greeting_mentions_member() {
        assert_eq!(
            welcome_html(&member(7, "Ada Lovelace")),
            r#"Welcome <a href="tg://user?id=7">Ada Lovelace</a>"#
        );
    }

    #[tokio::test]
    async fn one_greeting_per_member() {
        let messenger = FakeMessenger::new();
        let members = vec![member(1, "Ann"), member(2, "Bob")];

        welcome_members(&messenger, join_msg(), &members)
            .await
            .unwrap();

        assert_eq!(
            messenger.sent(),
            vec![
                Sent::Html(join_msg(), welcome_html(&members[0])),
                Sent::Html(join_msg(), welcome_html(&members[1])),
            ]
        );
    }

    #[tokio::test]
    async fn send_errors_propagate() {
        let messenger = FakeMessenger::failing_sends();
        let res = welcome_members(&messenger, join_msg(), &[member(1, "Ann")]).await;
        assert!(res.is_err());
    }
}
