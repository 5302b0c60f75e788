//! Ed25519 signing for document bodies.
//!
//! [`Ed25519Cryptographer`] wraps a document body in a CBOR
//! [`SignedEnvelope`] carrying the signer's public key and a signature over
//! the domain-separated body. Receivers decode and verify the envelope.

use bytes::Bytes;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EnvelopeError, SignError};
use crate::traits::Cryptographer;

/// Current envelope version.
pub const ENVELOPE_VERSION: u8 = 1;

/// Domain separation prefix for signed bodies.
pub const SIGN_DOMAIN: &[u8] = b"file-sender/document/v1\0";

/// A 32-byte Ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ed25519PublicKey(pub [u8; 32]);

impl Ed25519PublicKey {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| hex::FromHexError::InvalidStringLength)?;
        Ok(Self(arr))
    }

    /// Verify a signature over a message.
    pub fn verify(&self, message: &[u8], signature: &Ed25519Signature) -> Result<(), EnvelopeError> {
        let verifying_key =
            VerifyingKey::from_bytes(&self.0).map_err(|_| EnvelopeError::InvalidPublicKey)?;

        let sig = Signature::from_bytes(&signature.0);

        verifying_key
            .verify(message, &sig)
            .map_err(|_| EnvelopeError::InvalidSignature)
    }
}

impl fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Pub({})", &self.to_hex()[..16])
    }
}

/// A 64-byte Ed25519 signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ed25519Signature(pub [u8; 64]);

impl Ed25519Signature {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Sig({}...)", &self.to_hex()[..16])
    }
}

/// Signing material presented to a [`Cryptographer`].
///
/// Pairs an Ed25519 signing key with the subject it was issued to.
#[derive(Clone)]
pub struct Credential {
    subject: String,
    signing_key: SigningKey,
}

impl Credential {
    /// Generate a new random credential.
    pub fn generate(subject: impl Into<String>) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            subject: subject.into(),
            signing_key: SigningKey::generate(&mut rng),
        }
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(subject: impl Into<String>, seed: &[u8; 32]) -> Self {
        Self {
            subject: subject.into(),
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Who this credential was issued to.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Get the public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.signing_key.verifying_key().to_bytes())
    }

    /// Sign a message.
    pub fn sign(&self, message: &[u8]) -> Ed25519Signature {
        Ed25519Signature(self.signing_key.sign(message).to_bytes())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("subject", &self.subject)
            .field("public_key", &self.public_key())
            .finish()
    }
}

/// A signed document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedEnvelope {
    pub version: u8,
    pub signer: Ed25519PublicKey,
    pub subject: String,
    pub content: Bytes,
    pub signature: Ed25519Signature,
}

/// On-the-wire shape. Keys are short to keep envelopes compact.
#[derive(Serialize, Deserialize)]
struct WireEnvelope {
    v: u8,
    pk: Bytes,
    sub: String,
    body: Bytes,
    sig: Bytes,
}

impl SignedEnvelope {
    /// Sign `content` with `credential`.
    pub fn seal(content: &[u8], credential: &Credential) -> Self {
        Self {
            version: ENVELOPE_VERSION,
            signer: credential.public_key(),
            subject: credential.subject().to_string(),
            content: Bytes::copy_from_slice(content),
            signature: credential.sign(&signed_message(content)),
        }
    }

    /// Encode to CBOR.
    pub fn encode(&self) -> Result<Vec<u8>, SignError> {
        let wire = WireEnvelope {
            v: self.version,
            pk: Bytes::copy_from_slice(&self.signer.0),
            sub: self.subject.clone(),
            body: self.content.clone(),
            sig: Bytes::copy_from_slice(&self.signature.0),
        };
        let mut buf = Vec::new();
        ciborium::into_writer(&wire, &mut buf).map_err(|e| SignError::Encoding(e.to_string()))?;
        Ok(buf)
    }

    /// Decode from CBOR. Does not verify the signature.
    pub fn decode(bytes: &[u8]) -> Result<Self, EnvelopeError> {
        let wire: WireEnvelope =
            ciborium::from_reader(bytes).map_err(|e| EnvelopeError::Decoding(e.to_string()))?;

        if wire.v != ENVELOPE_VERSION {
            return Err(EnvelopeError::UnsupportedVersion(wire.v));
        }

        let pk: [u8; 32] = wire
            .pk
            .as_ref()
            .try_into()
            .map_err(|_| EnvelopeError::InvalidPublicKey)?;
        let sig: [u8; 64] = wire
            .sig
            .as_ref()
            .try_into()
            .map_err(|_| EnvelopeError::InvalidSignature)?;

        Ok(Self {
            version: wire.v,
            signer: Ed25519PublicKey(pk),
            subject: wire.sub,
            content: wire.body,
            signature: Ed25519Signature(sig),
        })
    }

    /// Check the signature against the embedded signer key.
    pub fn verify(&self) -> Result<(), EnvelopeError> {
        self.signer
            .verify(&signed_message(&self.content), &self.signature)
    }
}

/// Construct the signed message (domain || content).
fn signed_message(content: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(SIGN_DOMAIN.len() + content.len());
    buf.extend_from_slice(SIGN_DOMAIN);
    buf.extend_from_slice(content);
    buf
}

/// A [`Cryptographer`] producing CBOR-encoded [`SignedEnvelope`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Cryptographer;

impl Ed25519Cryptographer {
    pub const fn new() -> Self {
        Self
    }
}

impl Cryptographer for Ed25519Cryptographer {
    fn sign(&self, content: &[u8], credential: &Credential) -> Result<Vec<u8>, SignError> {
        SignedEnvelope::seal(content, credential).encode()
    }
}
