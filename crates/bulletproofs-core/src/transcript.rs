//! Transcript management for the Fiat-Shamir transform
//!
//! Protocol messages are absorbed as tagged, fixed-width encodings so that
//! prover and verifier hash exactly the same bytes.

use crate::group::{encode_point, encode_scalar, scalar_from_digest};
use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar};
use merlin::Transcript;
use sha2::{Digest, Sha256};

/// Version of the message encoding, carried in the high nibble of every tag
pub const ENCODING_VERSION: u8 = 1;

const POINT_KIND: u8 = 0x01;
const SCALAR_KIND: u8 = 0x02;

/// Width of one encoded message: tag byte plus 32 bytes of payload
pub const ENCODED_MESSAGE_SIZE: usize = 33;

/// A protocol message absorbed into the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Point(RistrettoPoint),
    Scalar(Scalar),
}

impl Message {
    /// Tag byte: encoding version in the high nibble, message kind in the low nibble
    pub fn tag(&self) -> u8 {
        let kind = match self {
            Message::Point(_) => POINT_KIND,
            Message::Scalar(_) => SCALAR_KIND,
        };
        (ENCODING_VERSION << 4) | kind
    }

    /// Canonical encoding: tag, then compressed point or big-endian scalar
    pub fn encode(&self) -> [u8; ENCODED_MESSAGE_SIZE] {
        let mut out = [0u8; ENCODED_MESSAGE_SIZE];
        out[0] = self.tag();
        let payload = match self {
            Message::Point(point) => encode_point(point),
            Message::Scalar(scalar) => encode_scalar(scalar),
        };
        out[1..].copy_from_slice(&payload);
        out
    }
}

impl From<RistrettoPoint> for Message {
    fn from(point: RistrettoPoint) -> Self {
        Message::Point(point)
    }
}

impl From<Scalar> for Message {
    fn from(scalar: Scalar) -> Self {
        Message::Scalar(scalar)
    }
}

/// Fiat-Shamir transcript used by the prover and the verifier
pub trait TranscriptProtocol {
    /// Start an empty transcript for one proof session
    fn new_session() -> Self
    where
        Self: Sized;

    /// Absorb protocol messages in order
    fn absorb(&mut self, messages: &[Message]);

    /// Derive `count` challenge scalars, advancing the state
    fn challenge_scalars(&mut self, count: usize) -> Vec<Scalar>;

    /// Derive a single challenge scalar
    fn challenge_scalar(&mut self) -> Scalar {
        self.challenge_scalars(1)[0]
    }
}

/// Running SHA-256 hash chain.
///
/// `absorb` sets `digest = H(digest ‖ encode(messages))`; each challenge sets
/// `digest = H(digest)` and reads the new digest as a big-endian scalar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sha256Transcript {
    digest: Option<[u8; 32]>,
}

impl Sha256Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Current digest, `None` before anything has been absorbed or challenged
    pub fn digest(&self) -> Option<&[u8; 32]> {
        self.digest.as_ref()
    }

    fn state(&self) -> &[u8] {
        self.digest.as_ref().map(|d| d.as_slice()).unwrap_or(&[])
    }
}

impl TranscriptProtocol for Sha256Transcript {
    fn new_session() -> Self {
        Self::new()
    }

    fn absorb(&mut self, messages: &[Message]) {
        let mut hasher = Sha256::new();
        hasher.update(self.state());
        for message in messages {
            hasher.update(message.encode());
        }
        self.digest = Some(hasher.finalize().into());
    }

    fn challenge_scalars(&mut self, count: usize) -> Vec<Scalar> {
        let mut challenges = Vec::with_capacity(count);
        for _ in 0..count {
            let next: [u8; 32] = Sha256::digest(self.state()).into();
            self.digest = Some(next);
            challenges.push(scalar_from_digest(next));
        }
        challenges
    }
}

/// Label under which merlin sessions are started
pub const MERLIN_LABEL: &[u8] = b"bulletproofs-rangeproof";

impl TranscriptProtocol for Transcript {
    fn new_session() -> Self {
        Transcript::new(MERLIN_LABEL)
    }

    fn absorb(&mut self, messages: &[Message]) {
        for message in messages {
            let label: &'static [u8] = match message {
                Message::Point(_) => b"point",
                Message::Scalar(_) => b"scalar",
            };
            self.append_message(label, &message.encode());
        }
    }

    fn challenge_scalars(&mut self, count: usize) -> Vec<Scalar> {
        (0..count)
            .map(|_| {
                let mut buf = [0u8; 64];
                self.challenge_bytes(b"challenge", &mut buf);
                Scalar::from_bytes_mod_order_wide(&buf)
            })
            .collect()
    }
}
