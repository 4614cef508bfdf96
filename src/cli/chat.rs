use std::{io, thread, time::Duration};

use clap::Args;
use maison::chat::{Author, ChatSession};

use super::{CliError, Locale};

#[derive(Debug, Args)]
pub(crate) struct ChatArgs {
    /// Message for the assistant
    #[arg(required_unless_present = "voice")]
    message: Vec<String>,

    /// Send a voice message instead of text
    #[arg(long, conflicts_with = "message")]
    voice: bool,
}

pub(crate) fn run(
    args: &ChatArgs,
    locale: Locale<'_>,
    out: impl io::Write,
) -> Result<(), CliError> {
    converse(args, locale, out, thread::sleep)
}

fn converse(
    args: &ChatArgs,
    locale: Locale<'_>,
    mut out: impl io::Write,
    mut wait: impl FnMut(Duration),
) -> Result<(), CliError> {
    let catalog = locale.catalog;
    let mut session = ChatSession::new(catalog);

    let reply = if args.voice {
        Some(session.submit_voice(catalog))
    } else {
        session.submit(&args.message.join(" "), catalog)
    };

    if let Some(reply) = reply {
        wait(reply.delay);
        session.deliver(reply);
    }

    for message in session.messages() {
        let prefix = match message.author {
            Author::User => ">",
            Author::Bot => "<",
        };

        writeln!(out, "{prefix} {}", message.text)?;
    }

    Ok(())
}
