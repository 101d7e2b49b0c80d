//! [`Console`] definitions.

mod mutation;
mod output;
mod query;
mod request;

use tokio::io::{
    self, AsyncBufRead, AsyncBufReadExt as _, AsyncWrite, AsyncWriteExt as _,
};

use crate::{error::Kind, AsError as _, Error, Service};

pub use self::{
    output::{Output, HELP},
    request::{Keyword, ParseError, Request},
};

/// Interactive line-oriented front of the [`Service`].
#[derive(Debug)]
pub struct Console {
    /// [`Service`] executing the [`Request`]s.
    service: Service,

    /// Text printed before reading every line.
    prompt: String,

    /// Text printed once the session starts.
    greeting: String,
}

impl Console {
    /// Creates a new [`Console`] over the provided [`Service`].
    #[must_use]
    pub fn new(service: Service, prompt: String, greeting: String) -> Self {
        Self {
            service,
            prompt,
            greeting,
        }
    }

    /// Returns [`Service`] of this [`Console`].
    #[must_use]
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Runs this [`Console`] until `EXIT` is entered or the `input` ends.
    ///
    /// Every line is answered with either its [`Output`] or an [`Error`],
    /// and neither of them ends the session.
    ///
    /// # Errors
    ///
    /// If reading the `input` or writing the `output` fails.
    pub async fn run<I, O>(&self, input: I, mut output: O) -> io::Result<()>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        if !self.greeting.is_empty() {
            output.write_all(self.greeting.as_bytes()).await?;
            output.write_all(b"\n").await?;
        }

        let mut lines = input.lines();
        loop {
            output.write_all(self.prompt.as_bytes()).await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let out = match Request::parse(&line) {
                Ok(None) => continue,
                Ok(Some(req)) => self.execute(req).await,
                Err(e) => Err(e.into_error()),
            };

            match out {
                Ok(Output::Farewell) => break,
                Ok(out) => {
                    output.write_all(format!("{out}\n").as_bytes()).await?;
                }
                Err(e) => {
                    tracing::debug!("{}", e.with_backtrace());
                    output.write_all(format!("{e}\n").as_bytes()).await?;
                }
            }
        }

        output
            .write_all(format!("{}\n", Output::Farewell).as_bytes())
            .await?;
        output.flush().await
    }

    /// Executes the provided [`Request`].
    ///
    /// # Errors
    ///
    /// If the [`Request`] is unknown or the [`Service`] rejects it.
    pub async fn execute(&self, req: Request) -> Result<Output, Error> {
        match req {
            Request::AddUser(cmd) => self.add_user(cmd).await,
            Request::RemoveUser(cmd) => self.remove_user(cmd).await,
            Request::AddHouse(cmd) => self.add_house(cmd).await,
            Request::RemoveHouse(cmd) => self.remove_house(cmd).await,
            Request::ListUsers => self.list_users().await,
            Request::Report => self.report().await,
            Request::SearchUser(q) => self.search_users(q).await,
            Request::SearchHouse(q) => self.search_houses(q).await,
            Request::Options(q) => self.options(q).await,
            Request::Purchase(cmd) => self.purchase(cmd).await,
            Request::Help => Ok(Output::Help),
            Request::Exit => Ok(Output::Farewell),
            Request::Unknown(word) => Err(Error::new(
                Kind::UnknownCommand,
                &format!("Unknown command `{word}`, type `HELP` for usage"),
            )),
        }
    }
}
