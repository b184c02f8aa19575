//! `serde` support, behind the `serde` feature.
//!
//! [`OwnedString`] serializes as a string when its content is UTF-8 and as
//! bytes otherwise, and deserializes from either (or from a sequence of
//! bytes, which is how self-describing formats often hand bytes back).
//! [`DynArray`] serializes as a sequence of its handles.
use core::{fmt, marker::PhantomData};

use bstr::ByteSlice;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
};

use crate::{DynArray, Handle, OwnedString};

impl Serialize for OwnedString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_bytes().to_str() {
            Ok(text) => serializer.serialize_str(text),
            Err(_) => serializer.serialize_bytes(self.as_bytes()),
        }
    }
}

struct OwnedStringVisitor;

impl<'de> Visitor<'de> for OwnedStringVisitor {
    type Value = OwnedString;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a byte sequence")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<OwnedString, E> {
        Ok(OwnedString::new(v))
    }

    fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<OwnedString, E> {
        Ok(OwnedString::new(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<OwnedString, A::Error> {
        let mut bytes = alloc::vec::Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        Ok(OwnedString::new(bytes))
    }
}

impl<'de> Deserialize<'de> for OwnedString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_byte_buf(OwnedStringVisitor)
    }
}

impl<H: Handle + Serialize> Serialize for DynArray<H> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for handle in self {
            seq.serialize_element(&handle)?;
        }
        seq.end()
    }
}

struct DynArrayVisitor<H>(PhantomData<H>);

impl<'de, H: Handle + Deserialize<'de>> Visitor<'de> for DynArrayVisitor<H> {
    type Value = DynArray<H>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of handles")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<DynArray<H>, A::Error> {
        let mut arr = DynArray::new();
        while let Some(handle) = seq.next_element()? {
            arr.append(handle);
        }
        Ok(arr)
    }
}

impl<'de, H: Handle + Deserialize<'de>> Deserialize<'de> for DynArray<H> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(DynArrayVisitor(PhantomData))
    }
}
