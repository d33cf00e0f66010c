//! Body accumulation sink (the transport write hook).

/// Accumulates response body chunks, optionally up to a byte limit.
///
/// `write` returns the number of bytes consumed from the offered chunk. The
/// fetch loop treats any short write as a fatal condition and aborts the
/// transfer; the sink itself never errors. This mirrors the contract transport
/// write callbacks are held to, with the opaque context pointer replaced by
/// ownership of the buffer.
#[derive(Debug)]
pub(crate) struct BufferSink {
    buffer: Vec<u8>,
    limit: Option<u64>,
}

impl BufferSink {
    /// Create a sink with an optional accumulation limit in bytes
    pub(crate) fn with_limit(limit: Option<u64>) -> Self {
        Self {
            buffer: Vec::new(),
            limit,
        }
    }

    /// Append a chunk verbatim and return the number of bytes consumed.
    ///
    /// With a limit configured, only the bytes that fit under the limit are
    /// consumed; the resulting short write tells the caller to abort.
    pub(crate) fn write(&mut self, chunk: &[u8]) -> usize {
        let accepted = match self.limit {
            Some(limit) => {
                let remaining = limit.saturating_sub(self.buffer.len() as u64);
                chunk.len().min(remaining as usize)
            }
            None => chunk.len(),
        };
        self.buffer.extend_from_slice(&chunk[..accepted]);
        accepted
    }

    /// Total number of bytes accumulated so far
    pub(crate) fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Consume the sink and take ownership of the accumulated bytes
    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}
