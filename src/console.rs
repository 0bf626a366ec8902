use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::error::ConsoleError;

/// Построчный клиент консоли поверх любой пары reader/writer.
///
/// Все циклы валидации ввода живут здесь: ядро получает уже проверенные значения.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    pub async fn print(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    pub async fn println(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    // EOF -> InputClosed
    async fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).await?;
        if read == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Спрашивает целое в `min..=max`, пока не получит корректное значение.
    pub async fn prompt_int(
        &mut self,
        prompt: &str,
        min: usize,
        max: usize,
    ) -> Result<usize, ConsoleError> {
        loop {
            self.print(prompt).await?;
            let line = self.read_line().await?;
            match line.parse::<usize>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                _ => {
                    debug!(input = %line, min, max, "Rejected numeric input");
                    self.println(&format!(
                        "Invalid input! Please enter a number between {min} and {max}"
                    ))
                    .await?;
                }
            }
        }
    }

    /// Непустая строка (пробелы по краям отбрасываются).
    pub async fn prompt_string(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        loop {
            self.print(prompt).await?;
            let line = self.read_line().await?;
            if !line.is_empty() {
                return Ok(line);
            }
            self.println("Input cannot be empty! Please try again.").await?;
        }
    }

    /// `yes`/`y` в любом регистре - да, всё остальное - нет.
    pub async fn prompt_yes_no(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        self.print(prompt).await?;
        let line = self.read_line().await?;
        Ok(matches!(line.to_lowercase().as_str(), "yes" | "y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &'static str) -> Console<&'static [u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn output(console: &Console<&'static [u8], Vec<u8>>) -> String {
        String::from_utf8_lossy(console.writer()).into_owned()
    }

    #[tokio::test]
    async fn prompt_int_reprompts_until_valid() {
        let mut c = console("abc\n99\n  7 \n");
        let value = c.prompt_int("Rows: ", 1, 50).await.unwrap();
        assert_eq!(value, 7);

        let out = output(&c);
        assert_eq!(out.matches("Rows: ").count(), 3);
        assert_eq!(
            out.matches("Invalid input! Please enter a number between 1 and 50").count(),
            2
        );
    }

    #[tokio::test]
    async fn prompt_string_rejects_blank() {
        let mut c = console("\n   \nAvatar\n");
        assert_eq!(c.prompt_string("Movie: ").await.unwrap(), "Avatar");
        assert_eq!(
            output(&c).matches("Input cannot be empty!").count(),
            2
        );
    }

    #[tokio::test]
    async fn eof_is_input_closed() {
        let mut c = console("");
        assert!(matches!(
            c.prompt_int("Rows: ", 1, 2).await,
            Err(ConsoleError::InputClosed)
        ));
        let mut c = console("\n");
        assert!(matches!(
            c.prompt_string("Name: ").await,
            Err(ConsoleError::InputClosed)
        ));
    }

    #[tokio::test]
    async fn yes_no_answers() {
        let mut c = console("Yes\ny\nNO\nmaybe\n");
        assert!(c.prompt_yes_no("? ").await.unwrap());
        assert!(c.prompt_yes_no("? ").await.unwrap());
        assert!(!c.prompt_yes_no("? ").await.unwrap());
        assert!(!c.prompt_yes_no("? ").await.unwrap());
    }
}
