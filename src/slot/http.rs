use super::link::{ACK, NAK};
use super::{SlotError, Slots};
use reqwest::blocking::Client;
use std::time::Duration;

/// Link frames carried in HTTP POST bodies, one request per frame.
/// The response body is the reply the link would send.
#[derive(Debug)]
pub struct HttpSlots {
    client: Client,
    url: String,
    count: u8,
    block_size: usize,
}

impl HttpSlots {
    pub fn new(url: &str, count: u8, block_size: usize) -> Result<HttpSlots, SlotError> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(HttpSlots {
            client,
            url: url.to_string(),
            count,
            block_size,
        })
    }

    fn post(&self, frame: Vec<u8>) -> Result<Vec<u8>, SlotError> {
        let response = self
            .client
            .post(self.url.as_str())
            .header("Content-Type", "application/octet-stream")
            .body(frame)
            .send()?
            .error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}

impl Slots for HttpSlots {
    fn slot_count(&self) -> u8 {
        self.count
    }

    fn read_block(&mut self, slot: u8) -> Result<Vec<u8>, SlotError> {
        let reply = self.post(vec![b'L', slot])?;
        match reply.split_first() {
            Some((&ACK, block)) if block.len() == self.block_size => Ok(block.to_vec()),
            Some((&NAK, _)) => Err(SlotError::Empty(slot)),
            _ => Err(SlotError::Protocol("unexpected reply")),
        }
    }

    fn persist_block(&mut self, slot: u8, block: &[u8]) -> Result<(), SlotError> {
        let mut frame = Vec::with_capacity(block.len() + 2);
        frame.push(b'S');
        frame.push(slot);
        frame.extend_from_slice(block);
        match self.post(frame)?.as_slice() {
            [ACK] => Ok(()),
            [NAK] => Err(SlotError::Protocol("save refused")),
            _ => Err(SlotError::Protocol("unexpected reply")),
        }
    }
}
