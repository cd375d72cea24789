use std::fmt::Display;
use std::io::{self, BufRead, BufReader, ErrorKind, Lines, Read, Write};
use std::str::FromStr;
use tracing::{instrument, warn};

/// A line oriented terminal.
#[derive(Debug)]
pub struct Io<W: Write, R: Read> {
    writer: W,
    reader: Lines<BufReader<R>>,
}

impl<W: Write, R: Read> Io<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Io {
            writer,
            reader: BufReader::new(reader).lines(),
        }
    }

    /// Receive a message.
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn recv(&mut self) -> io::Result<String> {
        self.reader.next().ok_or(ErrorKind::UnexpectedEof)?
    }

    /// Send a message.
    #[instrument(level = "trace", skip(self, msg), err, fields(%msg))]
    pub fn send<T: Display>(&mut self, msg: T) -> io::Result<()> {
        writeln!(&mut self.writer, "{}", msg)
    }

    /// Flush the internal buffers.
    #[instrument(level = "trace", skip(self), err)]
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Ask a question until the answer parses as `T`.
    ///
    /// Every unparsable answer is reported back before asking again.
    #[instrument(level = "trace", skip(self, question), err, fields(%question))]
    pub fn prompt<T>(&mut self, question: impl Display) -> io::Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        loop {
            write!(&mut self.writer, "{}: ", question)?;
            self.flush()?;

            let answer = self.recv()?;
            match answer.trim().parse() {
                Ok(t) => break Ok(t),
                Err(e) => {
                    warn!(%answer, "{}", e);
                    self.send(format_args!("invalid input `{}`, {}", answer.trim(), e))?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::VecDeque, io::empty, str};
    use test_strategy::proptest;

    #[proptest]
    fn recv_waits_for_line_break(#[strategy("[^\r\n]")] s: String) {
        let mut buf = VecDeque::new();
        writeln!(&mut buf, "{}", s)?;
        let mut io = Io::new(empty(), &mut buf);
        assert_eq!(io.recv()?, s);
    }

    #[test]
    fn recv_fails_at_end_of_input() {
        let mut io = Io::new(empty(), empty());
        assert_eq!(io.recv().map_err(|e| e.kind()), Err(ErrorKind::UnexpectedEof));
    }

    #[proptest]
    fn send_appends_line_break(s: String) {
        let mut buf = Vec::new();
        let mut io = Io::new(&mut buf, empty());
        io.send(&s)?;
        io.flush()?;
        drop(io);
        assert_eq!(str::from_utf8(&buf)?, format!("{s}\n"));
    }

    #[proptest]
    fn prompt_parses_answer(n: u32) {
        let mut out = Vec::new();
        let input = format!("  {n}  \n");
        let mut io = Io::new(&mut out, input.as_bytes());
        assert_eq!(io.prompt::<u32>("number")?, n);
        drop(io);
        assert_eq!(str::from_utf8(&out)?, "number: ");
    }

    #[test]
    fn prompt_asks_again_until_answer_is_valid() -> Result<(), anyhow::Error> {
        let mut out = Vec::new();
        let mut io = Io::new(&mut out, "foo\nbar\n42\n".as_bytes());
        assert_eq!(io.prompt::<u8>("number")?, 42);
        drop(io);

        let out = str::from_utf8(&out)?;
        assert_eq!(out.matches("number: ").count(), 3);
        assert!(out.contains("invalid input `foo`"));
        assert!(out.contains("invalid input `bar`"));

        Ok(())
    }

    #[test]
    fn prompt_fails_if_input_ends_before_valid_answer() {
        let mut io = Io::new(Vec::new(), "foo\n".as_bytes());
        assert_eq!(
            io.prompt::<u8>("number").map_err(|e| e.kind()),
            Err(ErrorKind::UnexpectedEof)
        );
    }
}
