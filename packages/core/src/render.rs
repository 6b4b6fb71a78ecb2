//! Human-readable text rendering of [`Message`]s and [`HubEvent`]s.
//!
//! The output is stable plain text suitable for terminals and logs. It is
//! not a canonical format; only the JSON wire format is normative.

use crate::event::{HubEvent, HubEventBody};
use crate::message::{Embed, Message, MessageBody};
use crate::onchain::{OnChainEvent, OnChainEventBody};
use crate::time::from_farcaster_time;

/// Render a single [`Message`] as indented plain text.
///
/// ```text
/// [MESSAGE_TYPE_CAST_ADD] fid 6833  2022-07-22T01:34:26Z
/// "gm"
///   reply to: 226/0xa48dd46161d8e57725f5e26e34ec19c13ff7f3b9
///   embed: https://farcaster.xyz
///
/// hash: 0xd2b1ddc6c88e865a33cb1a565e0058d757042974  signer: 0x0852c07b…
/// ```
pub fn render_message(message: &Message) -> String {
    let data = &message.data;
    let mut out = format!(
        "[{}] fid {}  {}\n",
        data.message_type(),
        data.fid,
        from_farcaster_time(data.timestamp).format("%Y-%m-%dT%H:%M:%SZ")
    );

    match &data.body {
        MessageBody::CastAdd { body } => {
            out.push_str(&wrap_content(&body.text, 80));
            out.push('\n');
            if let Some(parent) = &body.parent_cast_id {
                out.push_str(&format!("  reply to: {}/{}\n", parent.fid, parent.hash));
            }
            if let Some(url) = &body.parent_url {
                out.push_str(&format!("  channel: {url}\n"));
            }
            if !body.mentions.is_empty() {
                let fids: Vec<String> = body.mentions.iter().map(u64::to_string).collect();
                out.push_str(&format!("  mentions: {}\n", fids.join(", ")));
            }
            for embed in &body.embeds {
                match embed {
                    Embed::Url { url } => out.push_str(&format!("  embed: {url}\n")),
                    Embed::Cast { cast_id } => {
                        out.push_str(&format!("  embed: {}/{}\n", cast_id.fid, cast_id.hash))
                    }
                }
            }
        }
        MessageBody::CastRemove { body } => {
            out.push_str(&format!("  remove cast {}\n", body.target_hash));
        }
        MessageBody::ReactionAdd { body } | MessageBody::ReactionRemove { body } => {
            let target = match (&body.target_cast_id, &body.target_url) {
                (Some(id), _) => format!("{}/{}", id.fid, id.hash),
                (None, Some(url)) => url.clone(),
                (None, None) => "-".into(),
            };
            out.push_str(&format!("  {} → {}\n", body.reaction_type, target));
        }
        MessageBody::LinkAdd { body } | MessageBody::LinkRemove { body } => {
            out.push_str(&format!("  {} → fid {}\n", body.link_type, body.target_fid));
        }
        MessageBody::VerificationAddEthAddress { body } => {
            out.push_str(&format!("  verify {}\n", body.address));
        }
        MessageBody::VerificationRemove { body } => {
            out.push_str(&format!("  unverify {}\n", body.address));
        }
        MessageBody::UserDataAdd { body } => {
            out.push_str(&format!("  {} = {:?}\n", body.user_data_type, body.value));
        }
        MessageBody::UsernameProof { body } => {
            out.push_str(&format!(
                "  {} {} owned by {} (fid {})\n",
                body.name_type, body.name, body.owner, body.fid
            ));
        }
        MessageBody::FrameAction { body } => {
            out.push_str(&format!(
                "  button {} on {} (cast {}/{})\n",
                body.button_index, body.url, body.cast_id.fid, body.cast_id.hash
            ));
        }
    }

    out.push('\n');
    out.push_str(&format!(
        "hash: {}  signer: {}\n",
        message.hash,
        short_hex(&message.signer)
    ));
    out
}

/// Render a list of messages, separated by blank lines.
pub fn render_messages(messages: &[Message]) -> String {
    let header = format!(
        "{} message{}",
        messages.len(),
        if messages.len() == 1 { "" } else { "s" }
    );
    let rule = "─".repeat(header.chars().count());
    let mut out = format!("{header}\n{rule}\n");
    for m in messages {
        out.push('\n');
        out.push_str(&render_message(m));
    }
    out
}

/// Render a [`HubEvent`] as a one-line summary followed by its payload.
pub fn render_event(event: &HubEvent) -> String {
    let mut out = format!("#{} {}\n", event.id, event.event_type());
    match &event.body {
        HubEventBody::MergeMessage { body } => {
            out.push_str(&indent(&render_message(&body.message)));
            if !body.deleted_messages.is_empty() {
                out.push_str(&format!("  deleted: {}\n", body.deleted_messages.len()));
            }
        }
        HubEventBody::PruneMessage { body } => out.push_str(&indent(&render_message(&body.message))),
        HubEventBody::RevokeMessage { body } => {
            out.push_str(&indent(&render_message(&body.message)))
        }
        HubEventBody::MergeUsernameProof { body } => {
            if let Some(proof) = &body.username_proof {
                out.push_str(&format!("  + {} (fid {})\n", proof.name, proof.fid));
            }
            if let Some(proof) = &body.deleted_username_proof {
                out.push_str(&format!("  - {} (fid {})\n", proof.name, proof.fid));
            }
        }
        HubEventBody::MergeOnChainEvent { body } => {
            out.push_str(&format!("  {}\n", render_on_chain_event(&body.on_chain_event)));
        }
    }
    out
}

/// One-line summary of an [`OnChainEvent`].
pub fn render_on_chain_event(event: &OnChainEvent) -> String {
    let detail = match &event.body {
        OnChainEventBody::Signer { body } => {
            format!("{} {}", body.event_type, short_hex(&body.key))
        }
        OnChainEventBody::SignerMigrated { body } => format!("migrated at {}", body.migrated_at),
        OnChainEventBody::IdRegister { body } => {
            format!("{} to {}", body.event_type, body.to)
        }
        OnChainEventBody::StorageRent { body } => {
            format!("{} unit(s) until {}", body.units, body.expiry)
        }
    };
    format!(
        "[{}] fid {} block {}: {}",
        event.event_type(),
        event.fid,
        event.block_number,
        detail
    )
}

// --- helpers -----------------------------------------------------------------

fn wrap_content(content: &str, width: usize) -> String {
    if content.len() <= width {
        return format!("\"{}\"", content);
    }
    let mut result = String::from("\"");
    let mut line_len = 1usize;
    for word in content.split_whitespace() {
        if line_len + word.len() + 1 > width {
            result.push('\n');
            result.push(' ');
            line_len = 1;
        } else if line_len > 1 {
            result.push(' ');
            line_len += 1;
        }
        result.push_str(word);
        line_len += word.len();
    }
    result.push('"');
    result
}

fn short_hex(s: &str) -> String {
    if s.chars().count() <= 12 {
        s.to_string()
    } else {
        format!("{}…", s.chars().take(10).collect::<String>())
    }
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|l| if l.is_empty() { "\n".to_string() } else { format!("  {l}\n") })
        .collect()
}

// --- tests -------------------------------------------------------------------
