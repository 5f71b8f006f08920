//! Interactive prompt loop around the cipher.
//!
//! The session is generic over its input and output so it can be driven by
//! the terminal or by in-memory buffers. End of input at a single line prompt,
//! or Ctrl-C there, ends the session. Ctrl-C while the text block is being
//! read only cancels the current round.

use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::signal;

use crate::config::PromptDefaults;
use crate::constants::MAX_SHIFT;
use crate::error::{InputError, Result};
use crate::prompt::{parse_choice, parse_shift, parse_yes_no, require_text, Choice};
use crate::structs::{CaesarCipher, Mode};

enum TextBlock {
    Received(String),
    Cancelled,
}

pub struct Session<R, W> {
    reader: R,
    writer: W,
    defaults: PromptDefaults,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, defaults: PromptDefaults) -> Self {
        Session {
            reader,
            writer,
            defaults,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub async fn run(&mut self) -> Result<()> {
        info!("session started with {:?}", self.defaults);
        self.say("\n=== Caesar Cipher CLI ===\n\n").await?;

        while let Some(mode) = self.read_mode().await? {
            let Some(shift) = self.read_shift().await? else {
                break;
            };
            let Some(encode_punct) = self
                .ask_yes_no("Encode punctuation too?", self.defaults.encode_punct)
                .await?
            else {
                break;
            };
            let Some(encode_space) = self
                .ask_yes_no("Encode spaces too?", self.defaults.encode_space)
                .await?
            else {
                break;
            };

            let cipher = CaesarCipher::new(i64::from(shift), encode_punct, encode_space);

            self.say(
                "\nPaste or type the text, then press Enter and Ctrl+D (Mac/Linux) \
                 or Ctrl+Z Enter (Windows) to finish:\n\n",
            )
            .await?;

            let raw = match self.read_text().await? {
                TextBlock::Received(raw) => raw,
                TextBlock::Cancelled => {
                    self.say("\n⚠️  Cancelled\n\n").await?;
                    continue;
                }
            };

            let text = match require_text(&raw) {
                Ok(text) => text,
                Err(e) => {
                    self.warn(&e).await?;
                    continue;
                }
            };

            let result = cipher.apply(mode, text);
            info!("{:?} applied to {} chars", mode, text.chars().count());

            self.say(&format!("\n=== Result ===\n{result}\n\n================\n\n"))
                .await?;

            if self.ask_yes_no("Continue?", true).await? != Some(true) {
                break;
            }
        }

        self.say("Bye!\n").await?;
        info!("session ended");

        Ok(())
    }

    async fn read_mode(&mut self) -> Result<Option<Mode>> {
        loop {
            self.say("Mode: (E)ncrypt / (D)ecrypt / (Q)uit: ").await?;

            let Some(line) = self.read_line().await? else {
                return Ok(None);
            };

            match parse_choice(&line) {
                Ok(Choice::Run(mode)) => {
                    debug!("mode selected: {:?}", mode);
                    return Ok(Some(mode));
                }
                Ok(Choice::Quit) => return Ok(None),
                Err(e) => self.warn(&e).await?,
            }
        }
    }

    async fn read_shift(&mut self) -> Result<Option<u8>> {
        let prompt = format!("Shift 0-{} [{}]: ", MAX_SHIFT, self.defaults.shift);

        loop {
            self.say(&prompt).await?;

            let Some(line) = self.read_line().await? else {
                return Ok(None);
            };

            match parse_shift(&line, self.defaults.shift) {
                Ok(shift) => return Ok(Some(shift)),
                Err(e) => self.warn(&e).await?,
            }
        }
    }

    async fn ask_yes_no(&mut self, question: &str, default: bool) -> Result<Option<bool>> {
        let shown = if default { "Y" } else { "n" };
        self.say(&format!("{question} (Y/n) [{shown}]: ")).await?;

        Ok(self
            .read_line()
            .await?
            .map(|line| parse_yes_no(&line, default)))
    }

    /// `None` on end of input or Ctrl-C.
    async fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();

        let read = tokio::select! {
            read = self.reader.read_line(&mut line) => read?,
            Ok(()) = signal::ctrl_c() => {
                debug!("interrupted at prompt");
                return Ok(None);
            }
        };

        if read == 0 {
            debug!("input closed at prompt");
            return Ok(None);
        }

        Ok(Some(line))
    }

    async fn read_text(&mut self) -> Result<TextBlock> {
        let mut text = String::new();

        let cancelled = tokio::select! {
            read = self.reader.read_to_string(&mut text) => {
                read?;
                false
            }
            Ok(()) = signal::ctrl_c() => true,
        };

        if cancelled {
            debug!("text input cancelled");
            return Ok(TextBlock::Cancelled);
        }

        Ok(TextBlock::Received(text))
    }

    async fn warn(&mut self, error: &InputError) -> Result<()> {
        debug!("rejected input: {}", error);
        self.say(&format!("⚠️  {error}. Please try again.\n\n")).await
    }

    async fn say(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SPACE_PLACEHOLDER;
    use crate::traits::Encryptor;

    async fn run(input: &str, defaults: PromptDefaults) -> String {
        let mut session = Session::new(input.as_bytes(), Vec::new(), defaults);
        session.run().await.unwrap();

        String::from_utf8(session.into_writer()).unwrap()
    }

    #[tokio::test]
    async fn encrypts_hello_world() {
        let output = run("e\n3\nn\nn\nHello, World!\n", PromptDefaults::default()).await;

        assert!(output.starts_with("\n=== Caesar Cipher CLI ===\n"));
        assert!(output.contains("=== Result ===\nKhoor, Zruog!\n"));
        assert!(output.ends_with("Bye!\n"));
    }

    #[tokio::test]
    async fn decrypts_with_punctuation_and_spaces() {
        let cipher = CaesarCipher::new(9, true, true);
        let secret = cipher.encrypt("Meet me at 10, okay?");
        let output = run(&format!("D\n9\ny\nyes\n{secret}"), PromptDefaults::default()).await;

        assert!(output.contains("Meet me at 10, okay?"));
    }

    #[tokio::test]
    async fn quit_skips_everything() {
        let output = run("q\n", PromptDefaults::default()).await;

        assert!(!output.contains("Shift"));
        assert!(output.ends_with("Bye!\n"));
    }

    #[tokio::test]
    async fn unknown_mode_prompts_again() {
        let output = run("x\nq\n", PromptDefaults::default()).await;

        assert!(output.contains("unknown mode `x`"));
        assert_eq!(output.matches("Mode: ").count(), 2);
    }

    #[tokio::test]
    async fn invalid_shift_prompts_until_valid() {
        let output = run("e\n99\nabc\n\n\n\nabc", PromptDefaults::default()).await;

        assert!(output.contains("shift 99 is outside 0-25"));
        assert!(output.contains("`abc` is not a whole number"));
        assert_eq!(output.matches("Shift 0-25 [3]: ").count(), 3);
        assert!(output.contains("=== Result ===\ndef\n"));
    }

    #[tokio::test]
    async fn blank_text_is_rejected() {
        let output = run("e\n\n\n\n  \n", PromptDefaults::default()).await;

        assert!(output.contains("no text received"));
        assert!(!output.contains("=== Result ==="));
        assert_eq!(output.matches("Mode: ").count(), 2);
    }

    #[tokio::test]
    async fn empty_input_says_bye() {
        let output = run("", PromptDefaults::default()).await;

        assert!(output.ends_with("Mode: (E)ncrypt / (D)ecrypt / (Q)uit: Bye!\n"));
    }

    #[tokio::test]
    async fn configured_defaults_apply_on_enter() {
        let defaults = PromptDefaults {
            shift: 1,
            encode_punct: false,
            encode_space: true,
        };
        let output = run("e\n\n\n\na b", defaults).await;

        assert!(output.contains("Shift 0-25 [1]: "));
        assert!(output.contains("Encode spaces too? (Y/n) [Y]: "));
        assert!(output.contains(&format!("b{SPACE_PLACEHOLDER}c")));
    }
}
