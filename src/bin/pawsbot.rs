use anyhow::Context;
use pawsbot_relay::{
    config::{DEFAULT_RELAY_URL, env},
    logging::configure_logging,
    message::Role,
    topics::QuickTopic,
    widget::{
        ChatWidget, Message, PendingTurn,
        client::{DEFAULT_RELAY_TIMEOUT, HttpRelayClient, RelayClient},
    },
};
use tokio::io::{AsyncBufReadExt, BufReader};

fn print_message(msg: &Message) {
    match msg.role {
        Role::User => println!("you> {}", msg.content),
        Role::Assistant => println!("PawsBot> {}\n", msg.content),
    }
}

fn print_topics() {
    for topic in QuickTopic::ALL {
        println!("  /topic {:<16} {}", topic.id(), topic.label());
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    configure_logging();

    let url = std::env::var(env::RELAY_URL).unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string());
    let api_key = std::env::var(env::RELAY_API_KEY).ok();
    let client = HttpRelayClient::new(url.clone(), api_key, DEFAULT_RELAY_TIMEOUT)
        .with_context(|| format!("building relay client for {url}"))?;

    let mut widget = ChatWidget::new().with_scroll_hook(print_message);
    widget.toggle_open();
    for msg in widget.messages() {
        print_message(msg);
    }
    println!("Quick topics (or type a question, /quit to leave):");
    print_topics();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let pending = if line == "/quit" {
            break;
        } else if line == "/topics" {
            print_topics();
            continue;
        } else if let Some(tag) = line.strip_prefix("/topic ") {
            let pending = widget.select_topic(tag.trim());
            if pending.is_none() {
                println!("unknown topic `{}`", tag.trim());
            }
            pending
        } else {
            widget.set_input(line);
            widget.begin_submit_input()
        };

        if let Some(PendingTurn { ticket, request }) = pending {
            let outcome = client.send(&request).await;
            widget.finish(ticket, outcome);
        }
    }

    Ok(())
}
