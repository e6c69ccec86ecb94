use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Stdout, Write};

/// Destination for a rendered report.
pub struct Writer {
    buffer: WriteBuffer,
}

impl Writer {
    pub fn new(buffer: WriteBuffer) -> Self {
        Self { buffer }
    }

    pub fn stdout() -> Self {
        Self::new(WriteBuffer::Stdout(std::io::stdout()))
    }

    pub fn in_memory() -> Self {
        Self::new(WriteBuffer::Vec(vec![]))
    }

    pub fn create(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let file = File::options()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        Ok(Self::new(WriteBuffer::File(file)))
    }

    /// Reads back whatever was written. Stdout cannot be read back and
    /// yields an empty string.
    pub fn into_string(self) -> crate::Result<String> {
        self.buffer.into_string()
    }
}

impl Write for Writer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.buffer.flush()
    }
}

pub enum WriteBuffer {
    Stdout(Stdout),
    Vec(Vec<u8>),
    File(File),
}

impl WriteBuffer {
    fn into_string(self) -> crate::Result<String> {
        match self {
            WriteBuffer::Stdout(..) => Ok(String::new()),
            WriteBuffer::Vec(vec) => Ok(String::from_utf8(vec)?),
            WriteBuffer::File(mut file) => {
                let mut data = String::new();
                file.seek(SeekFrom::Start(0))?;
                file.read_to_string(&mut data)?;
                Ok(data)
            }
        }
    }
}

impl Write for WriteBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            WriteBuffer::Stdout(stdout) => stdout.write(buf),
            WriteBuffer::Vec(vec) => vec.write(buf),
            WriteBuffer::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            WriteBuffer::Stdout(stdout) => stdout.flush(),
            WriteBuffer::Vec(vec) => vec.flush(),
            WriteBuffer::File(file) => file.flush(),
        }
    }
}
