//! The parser operates over a stream of `char`s produced by some flavour of iterator.
//! By default this iterator is a decoder that takes bytes from an underlying source and
//! converts them into `char`s; the [DecoderSelector] instantiates the appropriate decoder
//! for a requested [Encoding]. (Currently ASCII and UTF-8 are supported.)
use chisel_decoders::{ascii::AsciiDecoder, utf8::Utf8Decoder};
use std::io::BufRead;

/// Enumeration of the supported input encodings
#[derive(Copy, Clone)]
pub enum Encoding {
    Utf8,
    Ascii,
}

impl Default for Encoding {
    fn default() -> Self {
        if cfg!(feature = "default_utf8_encoding") {
            Self::Utf8
        } else {
            Self::Ascii
        }
    }
}

/// Factory for `char` iterators over a byte source, keyed on [Encoding]
#[derive(Default)]
pub(crate) struct DecoderSelector {}

impl DecoderSelector {
    /// Create a decoder for a specific [Encoding]
    pub fn new_decoder<'a, Buffer: BufRead>(
        &'a self,
        buffer: &'a mut Buffer,
        encoding: Encoding,
    ) -> Box<dyn Iterator<Item = char> + 'a> {
        match encoding {
            Encoding::Ascii => Box::new(AsciiDecoder::new(buffer)),
            Encoding::Utf8 => Box::new(Utf8Decoder::new(buffer)),
        }
    }
}
