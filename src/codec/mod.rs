//! # Codec
//!
//! The canonical encoder used for every record exchanged with the child chain.
//!
//! Records are serialized with RLP. Decoding is driven by the target type, which acts as the
//! schema: `decode::<Block>(bytes)` only succeeds if `bytes` has exactly the shape of a block.
//! Items are read lazily, one level at a time, so the nesting of the input never goes deeper
//! than the schema being decoded.

mod errors;

pub use errors::{RlpError, RlpResult};
pub use rlp::{DecoderError, Rlp, RlpStream};

/// A record which can be appended to an rlp stream
pub trait Encodable {
    fn rlp_append(&self, stream: &mut RlpStream);
}

/// A record which can be rebuilt from an rlp item of the expected shape
pub trait Decodable: Sized {
    fn rlp_decode(rlp: &Rlp) -> RlpResult<Self>;
}

/// Encode `record` into its canonical byte representation
pub fn encode<T: Encodable + ?Sized>(record: &T) -> Vec<u8> {
    let mut stream = RlpStream::new();
    record.rlp_append(&mut stream);
    stream.out().to_vec()
}

/// Decode `data` as a `T`. The whole input must be consumed
pub fn decode<T: Decodable>(data: &[u8]) -> RlpResult<T> {
    let rlp = Rlp::new(data);
    let total = rlp.payload_info()?.total();
    if total > data.len() {
        return Err(RlpError::Decoder(DecoderError::RlpIsTooShort));
    }
    if total < data.len() {
        return Err(RlpError::TrailingBytes(data.len() - total));
    }
    T::rlp_decode(&rlp)
}

/// Encoding capability, so that callers can be handed a different codec
pub trait Encoder {
    /// Encode `record` into bytes
    fn encode<T: Encodable>(&self, record: &T) -> Vec<u8>;

    /// Decode `data` using `T` as schema
    fn decode<T: Decodable>(&self, data: &[u8]) -> RlpResult<T>;
}

/// The rlp [`Encoder`]
#[derive(Debug, Default, Clone, Copy)]
pub struct RlpEncoder;

impl Encoder for RlpEncoder {
    fn encode<T: Encodable>(&self, record: &T) -> Vec<u8> {
        encode(record)
    }

    fn decode<T: Decodable>(&self, data: &[u8]) -> RlpResult<T> {
        decode(data)
    }
}

/// Split a list into its items.
///
/// The items must fill the list payload exactly, otherwise a malformed item would silently
/// end the iteration.
pub fn list_items<'a>(rlp: &Rlp<'a>) -> RlpResult<Vec<Rlp<'a>>> {
    if !rlp.is_list() {
        return Err(RlpError::ExpectedList);
    }
    let payload_len = rlp.payload_info()?.value_len;
    let items: Vec<Rlp<'a>> = rlp.iter().collect();
    let consumed: usize = items.iter().map(|x| x.as_raw().len()).sum();
    if consumed != payload_len {
        return Err(RlpError::Decoder(DecoderError::RlpInconsistentLengthAndData));
    }
    Ok(items)
}

/// Split a list which must have exactly `len` fields
pub fn expect_fields<'a>(rlp: &Rlp<'a>, len: usize) -> RlpResult<Vec<Rlp<'a>>> {
    let fields = list_items(rlp)?;
    if fields.len() != len {
        return Err(RlpError::FieldCount {
            expected: len,
            found: fields.len(),
        });
    }
    Ok(fields)
}

/// Decode a byte string of exactly `N` bytes
pub fn decode_array<const N: usize>(rlp: &Rlp, field: &'static str) -> RlpResult<[u8; N]> {
    let bytes: Vec<u8> = rlp.as_val()?;
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| RlpError::InvalidLength {
        field,
        expected: N,
        found: bytes.len(),
    })
}

/// Append a homogeneous list
pub fn append_list<T: Encodable>(stream: &mut RlpStream, items: &[T]) {
    stream.begin_list(items.len());
    for item in items {
        item.rlp_append(stream);
    }
}

/// Decode a homogeneous list
pub fn decode_list<T: Decodable>(rlp: &Rlp) -> RlpResult<Vec<T>> {
    list_items(rlp)?.iter().map(T::rlp_decode).collect()
}

// -- primitives

impl Encodable for u64 {
    fn rlp_append(&self, stream: &mut RlpStream) {
        stream.append(self);
    }
}

impl Decodable for u64 {
    fn rlp_decode(rlp: &Rlp) -> RlpResult<Self> {
        rlp.as_val().map_err(RlpError::from)
    }
}

impl Encodable for Vec<u8> {
    fn rlp_append(&self, stream: &mut RlpStream) {
        stream.append(self);
    }
}

impl Decodable for Vec<u8> {
    fn rlp_decode(rlp: &Rlp) -> RlpResult<Self> {
        rlp.as_val().map_err(RlpError::from)
    }
}
