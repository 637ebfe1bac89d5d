//! The parser.
//!
//! [Parser] is the front end: it turns files, byte slices or strings into a `char` stream
//! via the configured decoder and hands the buffered stream to the machine. The machine
//! itself is an explicit state enum driven by a loop over a single cursor - container
//! nesting lives on a [ContainerTrace] rather than the call stack, so depth is bounded
//! only by memory. One pass, no backtracking; every grammar violation halts the parse
//! immediately with the offending coordinates and the machine state at the time.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::coords::Coords;
use crate::decoders::{DecoderSelector, Encoding};
use crate::errors::{ParserErrorDetails, ParserResult};
use crate::store::{Document, Value, ValueKind, ValueStore};
use crate::trace::ContainerTrace;

/// Main JSON parser struct
pub struct Parser {
    decoders: DecoderSelector,
    encoding: Encoding,
}

impl Default for Parser {
    /// The default encoding is Utf-8
    fn default() -> Self {
        Self {
            decoders: Default::default(),
            encoding: Default::default(),
        }
    }
}

impl Parser {
    /// Create a new instance of the parser using a specific [Encoding]
    pub fn with_encoding(encoding: Encoding) -> Self {
        Self {
            decoders: Default::default(),
            encoding,
        }
    }

    /// Read the full contents of a file and parse them. The read happens up front;
    /// the machine itself never touches the filesystem.
    pub fn parse_file<PathLike: AsRef<Path>>(&self, path: PathLike) -> ParserResult<Document> {
        match File::open(&path) {
            Ok(f) => {
                let mut reader = BufReader::new(f);
                let mut chars = self.decoders.new_decoder(&mut reader, self.encoding);
                self.parse(&mut chars)
            }
            Err(_) => parser_error!(ParserErrorDetails::InvalidFile, "BeforeRoot"),
        }
    }

    pub fn parse_bytes(&self, bytes: &[u8]) -> ParserResult<Document> {
        if bytes.is_empty() {
            return parser_error!(
                ParserErrorDetails::ZeroLengthInput,
                Coords::default(),
                "BeforeRoot"
            );
        }
        let mut reader = BufReader::new(bytes);
        let mut chars = self.decoders.new_decoder(&mut reader, self.encoding);
        self.parse(&mut chars)
    }

    pub fn parse_str(&self, str: &str) -> ParserResult<Document> {
        if str.is_empty() {
            return parser_error!(
                ParserErrorDetails::ZeroLengthInput,
                Coords::default(),
                "BeforeRoot"
            );
        }
        let mut reader = BufReader::new(str.as_bytes());
        let mut chars = self.decoders.new_decoder(&mut reader, self.encoding);
        self.parse(&mut chars)
    }

    pub fn parse(&self, chars: &mut impl Iterator<Item = char>) -> ParserResult<Document> {
        let mut machine = Machine::new(chars.collect());
        machine.execute()?;
        Ok(machine.into_document())
    }
}

/// The explicit parse states the machine transitions through
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ParseState {
    /// Looking for the root value
    BeforeRoot,
    /// Just inside a `[`: either `]` or a first element
    ArrayEntered,
    /// Just inside a `{`: either `}` or a first key
    ObjectEntered,
    /// At a position where a value must start
    BeforeValue,
    /// Inside an object, at a position where a quoted key must start
    ExpectingKey,
    /// A value just finished; expecting a separator or a container close
    AfterValue,
    /// The root value is complete; only whitespace may remain
    AfterRoot,
    /// Terminal success state
    Done,
    /// Absorbing terminal error state
    Failed,
}

impl ParseState {
    fn name(&self) -> &'static str {
        match self {
            Self::BeforeRoot => "BeforeRoot",
            Self::ArrayEntered => "ArrayEntered",
            Self::ObjectEntered => "ObjectEntered",
            Self::BeforeValue => "BeforeValue",
            Self::ExpectingKey => "ExpectingKey",
            Self::AfterValue => "AfterValue",
            Self::AfterRoot => "AfterRoot",
            Self::Done => "Done",
            Self::Failed => "Failed",
        }
    }
}

/// The parse state machine: one buffered input, one cursor, one store
struct Machine {
    content: Vec<char>,
    cursor: usize,
    coords: Coords,
    state: ParseState,
    trace: ContainerTrace,
    store: ValueStore,
    root: Value,
}

impl Machine {
    fn new(content: Vec<char>) -> Self {
        Machine {
            content,
            cursor: 0,
            coords: Coords::default(),
            state: ParseState::BeforeRoot,
            trace: ContainerTrace::default(),
            store: ValueStore::new(),
            root: Value::NONE,
        }
    }

    fn into_document(self) -> Document {
        debug_assert_eq!(self.state, ParseState::Done);
        Document::new(self.store, self.root)
    }

    /// Run the machine to completion. Every call starts from a fully reset cursor,
    /// trace and store; nothing is carried over from a previous run.
    fn execute(&mut self) -> ParserResult<()> {
        self.store.clear();
        self.trace.clear();
        self.cursor = 0;
        self.coords = Coords::default();
        self.root = Value::NONE;
        self.state = ParseState::BeforeRoot;

        self.gobble_whitespace();
        if self.at_end() {
            return self.fail(ParserErrorDetails::ZeroLengthInput);
        }

        while self.state != ParseState::Done {
            match self.state {
                ParseState::BeforeRoot | ParseState::BeforeValue => self.step_value()?,
                ParseState::ArrayEntered => self.step_array_entered()?,
                ParseState::ObjectEntered => self.step_object_entered()?,
                ParseState::ExpectingKey => self.step_key()?,
                ParseState::AfterValue => self.step_after_value()?,
                ParseState::AfterRoot => self.step_after_root()?,
                ParseState::Done | ParseState::Failed => unreachable!(),
            }
        }

        debug_assert!(self.trace.is_empty());
        Ok(())
    }

    // ---- state steps ----

    fn step_value(&mut self) -> ParserResult<()> {
        self.gobble_whitespace();
        match self.peek()? {
            '[' => {
                self.advance();
                let array = self.store.new_array();
                self.attach(array);
                self.trace.push(array);
                self.state = ParseState::ArrayEntered;
            }
            '{' => {
                self.advance();
                let object = self.store.new_object();
                self.attach(object);
                self.trace.push(object);
                self.state = ParseState::ObjectEntered;
            }
            ch => {
                let value = self.parse_literal(ch)?;
                self.attach(value);
                self.state = self.post_value_state();
            }
        }
        Ok(())
    }

    fn step_array_entered(&mut self) -> ParserResult<()> {
        self.gobble_whitespace();
        if self.peek()? == ']' {
            self.advance();
            self.close_container();
        } else {
            self.state = ParseState::BeforeValue;
        }
        Ok(())
    }

    fn step_object_entered(&mut self) -> ParserResult<()> {
        self.gobble_whitespace();
        if self.peek()? == '}' {
            self.advance();
            self.close_container();
        } else {
            self.state = ParseState::ExpectingKey;
        }
        Ok(())
    }

    fn step_key(&mut self) -> ParserResult<()> {
        self.gobble_whitespace();
        if self.peek()? != '"' {
            return self.fail(ParserErrorDetails::KeyExpected);
        }
        let key = self.parse_string()?;
        self.gobble_whitespace();
        if self.peek()? != ':' {
            return self.fail(ParserErrorDetails::PairExpected);
        }
        self.advance();

        // the slot is registered with its object immediately; the value fills it in
        // once parsed, at which point the slot pops back off the trace
        let object = self.trace.top().unwrap_or(Value::NONE);
        debug_assert_eq!(object.kind, ValueKind::Object);
        let slot = self.store.new_key_value(key);
        self.store.object_mut(object).push(slot);
        self.trace.push(slot);
        self.state = ParseState::BeforeValue;
        Ok(())
    }

    fn step_after_value(&mut self) -> ParserResult<()> {
        self.gobble_whitespace();
        let top = self.trace.top().unwrap_or(Value::NONE);
        let ch = self.peek()?;
        match (top.kind, ch) {
            (ValueKind::Array, ',') => {
                self.advance();
                self.state = ParseState::BeforeValue;
            }
            (ValueKind::Array, ']') => {
                self.advance();
                self.close_container();
            }
            (ValueKind::Object, ',') => {
                self.advance();
                self.state = ParseState::ExpectingKey;
            }
            (ValueKind::Object, '}') => {
                self.advance();
                self.close_container();
            }
            (_, ch) => return self.fail(ParserErrorDetails::InvalidCharacter(ch)),
        }
        Ok(())
    }

    fn step_after_root(&mut self) -> ParserResult<()> {
        self.gobble_whitespace();
        if let Some(ch) = self.peek_optional() {
            return self.fail(ParserErrorDetails::TrailingCharacters(ch));
        }
        self.state = ParseState::Done;
        Ok(())
    }

    // ---- attachment protocol ----

    /// Attach a freshly produced value to whatever the trace top currently is: the root
    /// slot when the trace is empty, the open array, or the pending key/value slot
    /// (which is transient and pops as soon as its value lands).
    fn attach(&mut self, value: Value) {
        match self.trace.top() {
            None => self.root = value,
            Some(top) => match top.kind {
                ValueKind::Array => self.store.array_mut(top).push(value),
                ValueKind::KeyValue => {
                    self.store.key_value_mut(top).value = value;
                    self.trace.pop();
                }
                other => {
                    debug_assert!(false, "attach against open container of kind {}", other);
                }
            },
        }
    }

    fn close_container(&mut self) {
        self.trace.pop();
        self.state = self.post_value_state();
    }

    fn post_value_state(&self) -> ParseState {
        if self.trace.is_empty() {
            ParseState::AfterRoot
        } else {
            ParseState::AfterValue
        }
    }

    // ---- literals ----

    /// First-character dispatch for everything that isn't a container opener
    fn parse_literal(&mut self, ch: char) -> ParserResult<Value> {
        match ch {
            't' => self.parse_keyword("true", ValueKind::True),
            'f' => self.parse_keyword("false", ValueKind::False),
            'n' => self.parse_keyword("null", ValueKind::Null),
            '"' => {
                let decoded = self.parse_string()?;
                Ok(self.store.add_string(decoded))
            }
            '-' | '0'..='9' => self.parse_number(),
            other => self.fail(ParserErrorDetails::InvalidCharacter(other)),
        }
    }

    fn parse_keyword(&mut self, keyword: &'static str, kind: ValueKind) -> ParserResult<Value> {
        let start = self.cursor;
        for expected in keyword.chars() {
            match self.peek_optional() {
                Some(ch) if ch == expected => self.advance(),
                _ => {
                    let found: String = self.content[start..self.cursor.min(self.content.len())]
                        .iter()
                        .collect();
                    return self.fail(ParserErrorDetails::InvalidLiteral(found));
                }
            }
        }
        Ok(Value { kind, store_id: 0 })
    }

    /// Decode a string literal, cursor sitting on the opening quote. Escapes are decoded
    /// in place; raw control characters are rejected, as are \uXXXX escapes at or above
    /// 0x7F (this is an ASCII-oriented core).
    fn parse_string(&mut self) -> ParserResult<String> {
        debug_assert_eq!(self.peek_optional(), Some('"'));
        self.advance();
        let mut decoded = String::new();
        loop {
            let ch = match self.peek_optional() {
                Some(ch) => ch,
                None => return self.fail(ParserErrorDetails::UnterminatedString),
            };
            self.advance();
            match ch {
                '"' => return Ok(decoded),
                '\\' => decoded.push(self.parse_escape()?),
                c if (c as u32) < 0x20 => {
                    return self.fail(ParserErrorDetails::UnescapedControlCharacter(c))
                }
                c => decoded.push(c),
            }
        }
    }

    fn parse_escape(&mut self) -> ParserResult<char> {
        let ch = match self.peek_optional() {
            Some(ch) => ch,
            None => return self.fail(ParserErrorDetails::UnterminatedString),
        };
        self.advance();
        match ch {
            '"' => Ok('"'),
            '\\' => Ok('\\'),
            '/' => Ok('/'),
            'b' => Ok('\x08'),
            'f' => Ok('\x0C'),
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            'u' => self.parse_unicode_escape(),
            other => self.fail(ParserErrorDetails::InvalidEscapeSequence(other)),
        }
    }

    /// \uXXXX, exactly four hex digits; only code points below 0x7F are supported
    fn parse_unicode_escape(&mut self) -> ParserResult<char> {
        let mut code: u32 = 0;
        for _ in 0..4 {
            let ch = match self.peek_optional() {
                Some(ch) => ch,
                None => return self.fail(ParserErrorDetails::UnterminatedString),
            };
            let digit = match ch.to_digit(16) {
                Some(d) => d,
                None => return self.fail(ParserErrorDetails::InvalidCharacter(ch)),
            };
            self.advance();
            code = (code << 4) | digit;
        }
        if code >= 0x7F {
            return self.fail(ParserErrorDetails::InvalidUnicodeEscapeSequence(code));
        }
        // below 0x7F every code point is a valid char
        Ok(char::from_u32(code).unwrap_or('\u{0}'))
    }

    // ---- numbers ----

    /// Number grammar: optional sign, then either a lone `0` or a non-zero digit with
    /// trailing digits, then optional fraction and exponent. Fraction or exponent makes
    /// it a float; otherwise it parses as an exact i64, with overflow reported at the
    /// precise boundary.
    fn parse_number(&mut self) -> ParserResult<Value> {
        let start = self.cursor;
        let mut is_float = false;

        if self.peek_optional() == Some('-') {
            self.advance();
        }

        match self.peek_optional() {
            Some('0') => {
                self.advance();
                if matches!(self.peek_optional(), Some('0'..='9')) {
                    return self.fail_number(start, "leading zero");
                }
            }
            Some('1'..='9') => {
                self.advance();
                self.gobble_digits();
            }
            _ => return self.fail_number(start, "missing integer part"),
        }

        if self.peek_optional() == Some('.') {
            self.advance();
            is_float = true;
            if !matches!(self.peek_optional(), Some('0'..='9')) {
                return self.fail_number(start, "missing digits after '.'");
            }
            self.gobble_digits();
        }

        if matches!(self.peek_optional(), Some('e') | Some('E')) {
            self.advance();
            is_float = true;
            if matches!(self.peek_optional(), Some('+') | Some('-')) {
                self.advance();
            }
            if !matches!(self.peek_optional(), Some('0'..='9')) {
                return self.fail_number(start, "missing digits after exponent");
            }
            self.gobble_digits();
        }

        let repr: String = self.content[start..self.cursor].iter().collect();
        if is_float {
            self.float_value(&repr)
        } else {
            self.integer_value(&repr)
        }
    }

    fn gobble_digits(&mut self) {
        while matches!(self.peek_optional(), Some('0'..='9')) {
            self.advance();
        }
    }

    fn float_value(&mut self, repr: &str) -> ParserResult<Value> {
        match fast_float::parse::<f64, _>(repr.as_bytes()) {
            Ok(parsed) if parsed.is_finite() => Ok(self.store.add_float(parsed)),
            _ => self.fail(ParserErrorDetails::InvalidNumericRepresentation(
                repr.to_string(),
            )),
        }
    }

    #[cfg(feature = "mixed_numerics")]
    fn integer_value(&mut self, repr: &str) -> ParserResult<Value> {
        match lexical::parse::<i64, _>(repr.as_bytes()) {
            Ok(parsed) => Ok(self.store.add_integer(parsed)),
            Err(_) => self.fail(ParserErrorDetails::IntegerOutOfRange(repr.to_string())),
        }
    }

    #[cfg(not(feature = "mixed_numerics"))]
    fn integer_value(&mut self, repr: &str) -> ParserResult<Value> {
        // without mixed numerics everything is stored as a float
        self.float_value(repr)
    }

    fn fail_number<T>(&mut self, start: usize, _reason: &str) -> ParserResult<T> {
        let repr: String = self.content[start..self.cursor].iter().collect();
        self.fail(ParserErrorDetails::InvalidNumericRepresentation(repr))
    }

    // ---- cursor primitives ----

    fn at_end(&self) -> bool {
        self.cursor >= self.content.len()
    }

    fn peek_optional(&self) -> Option<char> {
        self.content.get(self.cursor).copied()
    }

    /// Bounds-checked peek: running off the end of the input is a reported error,
    /// never an out-of-range read
    fn peek(&mut self) -> ParserResult<char> {
        match self.peek_optional() {
            Some(ch) => Ok(ch),
            None => self.fail(ParserErrorDetails::EndOfInput),
        }
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek_optional() {
            self.coords.advance(ch);
            self.cursor += 1;
        }
    }

    fn gobble_whitespace(&mut self) {
        while matches!(self.peek_optional(), Some(' ') | Some('\t') | Some('\n') | Some('\r')) {
            self.advance();
        }
    }

    /// Halt the parse: record the failure state name and coordinates, absorb into Failed
    fn fail<T>(&mut self, details: ParserErrorDetails) -> ParserResult<T> {
        let state = self.state.name();
        self.state = ParseState::Failed;
        parser_error!(details, self.coords, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ParserErrorDetails;
    use crate::store::ValueKind;
    use crate::{reader_from_bytes, relative_file};
    use bytesize::ByteSize;
    use chisel_decoders::utf8::Utf8Decoder;
    use std::io::BufReader;
    use std::path::PathBuf;
    use std::time::Instant;

    fn parse(input: &str) -> ParserResult<Document> {
        Parser::default().parse_str(input)
    }

    #[test]
    fn should_parse_root_literals() {
        let document = parse("null").unwrap();
        assert_eq!(document.root().kind, ValueKind::Null);

        let document = parse("  true  ").unwrap();
        assert_eq!(document.root().kind, ValueKind::True);

        let document = parse("\"line1\\nline2\"").unwrap();
        assert_eq!(document.string(document.root()), "line1\nline2");
    }

    #[cfg(feature = "mixed_numerics")]
    #[test]
    fn should_parse_integer_arrays() {
        let document = parse("[1, 2, 3]").unwrap();
        let root = document.root();
        assert_eq!(root.kind, ValueKind::Array);
        assert_eq!(document.array_len(root), 3);
        for (index, expected) in [1i64, 2, 3].iter().enumerate() {
            let element = document.element(root, index);
            assert_eq!(element.kind, ValueKind::Integer);
            assert_eq!(document.integer(element), *expected);
        }
    }

    #[test]
    fn should_parse_objects_with_mixed_values() {
        let document = parse(r#"{"a": true, "b": [1,2]}"#).unwrap();
        let root = document.root();
        assert_eq!(root.kind, ValueKind::Object);
        assert_eq!(document.entry_count(root), 2);

        let a = document.lookup(root, "a").unwrap();
        assert_eq!(a.kind, ValueKind::True);

        let b = document.lookup(root, "b").unwrap();
        assert_eq!(b.kind, ValueKind::Array);
        assert_eq!(document.array_len(b), 2);
        assert!(document.lookup(root, "c").is_none());
    }

    #[test]
    fn should_parse_scientific_floats() {
        let document = parse("-1.5e2").unwrap();
        let root = document.root();
        assert_eq!(root.kind, ValueKind::Float);
        assert_eq!(document.float(root), -150.0);
    }

    #[test]
    fn should_parse_nested_arrays() {
        let document = parse("[[1],[2,3]]").unwrap();
        let root = document.root();
        assert_eq!(document.array_len(root), 2);
        assert_eq!(document.array_len(document.element(root, 0)), 1);
        assert_eq!(document.array_len(document.element(root, 1)), 2);
    }

    #[test]
    fn should_parse_empty_containers() {
        let document = parse("[]").unwrap();
        assert_eq!(document.array_len(document.root()), 0);
        let document = parse("{ }").unwrap();
        assert_eq!(document.entry_count(document.root()), 0);
    }

    #[test]
    fn should_decode_supported_escapes() {
        let document = parse("\"q\\\" s\\\\ f\\/ b\\b f\\f n\\n r\\r t\\t \\u0041\"").unwrap();
        assert_eq!(
            document.string(document.root()),
            "q\" s\\ f/ b\x08 f\x0C n\n r\r t\t A"
        );
    }

    #[test]
    fn should_reject_unicode_escapes_beyond_ascii() {
        let result = parse("\"\\u20ac\"");
        assert_eq!(
            result.err().unwrap().details,
            ParserErrorDetails::InvalidUnicodeEscapeSequence(0x20ac)
        );
    }

    #[test]
    fn should_reject_unescaped_control_characters() {
        let result = parse("\"a\nb\"");
        assert!(matches!(
            result.err().unwrap().details,
            ParserErrorDetails::UnescapedControlCharacter('\n')
        ));
    }

    #[test]
    fn should_reject_the_grammar_violation_set() {
        for input in [
            "",
            "   ",
            "[1,]",
            "{",
            "[1 2]",
            "01",
            "1.",
            "\"unterminated",
            "truefoo",
        ] {
            let result = parse(input);
            assert!(result.is_err(), "expected rejection of {:?}", input);
        }
    }

    #[test]
    fn should_reject_trailing_characters_after_root_container() {
        let result = parse("[1] x");
        assert_eq!(
            result.err().unwrap().details,
            ParserErrorDetails::TrailingCharacters('x')
        );
    }

    #[cfg(feature = "mixed_numerics")]
    #[test]
    fn should_parse_exact_i64_boundaries() {
        let document = parse("9223372036854775807").unwrap();
        assert_eq!(document.integer(document.root()), i64::MAX);

        let result = parse("9223372036854775808");
        assert_eq!(
            result.err().unwrap().details,
            ParserErrorDetails::IntegerOutOfRange("9223372036854775808".to_string())
        );

        let document = parse("-9223372036854775808").unwrap();
        assert_eq!(document.integer(document.root()), i64::MIN);
    }

    #[cfg(not(feature = "mixed_numerics"))]
    #[test]
    fn numbers_should_parse_as_floats_without_mixed_numerics() {
        let document = parse("[1, 2, 9223372036854775808]").unwrap();
        let root = document.root();
        for index in 0..document.array_len(root) {
            assert_eq!(document.element(root, index).kind, ValueKind::Float);
        }
        assert_eq!(document.float(document.element(root, 0)), 1.0);
    }

    #[test]
    fn should_reject_object_separator_violations() {
        assert_eq!(
            parse(r#"{"a" 1}"#).err().unwrap().details,
            ParserErrorDetails::PairExpected
        );
        assert_eq!(
            parse(r#"{"a": 1,}"#).err().unwrap().details,
            ParserErrorDetails::KeyExpected
        );
        assert_eq!(
            parse("{1: 2}").err().unwrap().details,
            ParserErrorDetails::KeyExpected
        );
    }

    #[test]
    fn errors_should_carry_coordinates_and_state() {
        let error = parse("[1 2]").err().unwrap();
        assert_eq!(error.state, "AfterValue");
        let coords = error.coords.unwrap();
        assert_eq!(coords.absolute, 3);
    }

    #[test]
    fn container_trace_should_drain_on_success() {
        let mut machine =
            Machine::new(r#"{"a": [1, {"b": [true, null]}], "c": "d"}"#.chars().collect());
        machine.execute().unwrap();
        assert!(machine.trace.is_empty());
        assert_eq!(machine.state, ParseState::Done);
    }

    #[test]
    fn independent_parses_should_not_share_state() {
        let parser = Parser::default();
        let first = parser.parse_str("[\"a\", \"b\"]").unwrap();
        let second = parser.parse_str("[\"x\"]").unwrap();

        assert_eq!(document_values(&first), vec!["a", "b"]);
        assert_eq!(document_values(&second), vec!["x"]);

        fn document_values(document: &Document) -> Vec<&str> {
            (0..document.array_len(document.root()))
                .map(|i| document.string(document.element(document.root(), i)))
                .collect()
        }
    }

    #[test]
    fn should_parse_basic_test_files() {
        for f in std::fs::read_dir(relative_file!("fixtures/json/valid")).unwrap() {
            let path = f.unwrap().path();
            if path.is_file() {
                let len = std::fs::metadata(&path).unwrap().len();
                let start = Instant::now();
                let parser = Parser::default();
                let parsed = parser.parse_file(&path);
                if parsed.is_err() {
                    println!("Parse of {:?} failed: {:?}", &path, &parsed);
                }
                assert!(parsed.is_ok());
                println!("Parsed {} in {:?} [{:?}]", ByteSize(len), start.elapsed(), path);
            }
        }
    }

    #[test]
    fn should_reject_invalid_test_files() {
        for f in std::fs::read_dir(relative_file!("fixtures/json/invalid")).unwrap() {
            let path = f.unwrap().path();
            if path.is_file() {
                let parser = Parser::default();
                assert!(parser.parse_file(&path).is_err());
            }
        }
    }

    #[test]
    fn should_report_missing_files() {
        let parser = Parser::default();
        let result = parser.parse_file("fixtures/json/no_such_file.json");
        assert_eq!(result.err().unwrap().details, ParserErrorDetails::InvalidFile);
    }

    #[test]
    fn should_parse_decoded_byte_streams() {
        let mut reader = reader_from_bytes!("[1, [2, {\"three\": 3}]]");
        let mut chars = Utf8Decoder::new(&mut reader);
        let document = Parser::default().parse(&mut chars).unwrap();
        assert_eq!(document.array_len(document.root()), 2);
    }

    #[test]
    fn should_parse_ascii_encoded_input() {
        let parser = Parser::with_encoding(Encoding::Ascii);
        let document = parser
            .parse_str(r#"{"flag": true, "tag": "ascii"}"#)
            .unwrap();
        let tag = document.lookup(document.root(), "tag").unwrap();
        assert_eq!(document.string(tag), "ascii");

        let from_bytes = parser.parse_bytes(b"[null, \"plain\"]").unwrap();
        assert_eq!(from_bytes.array_len(from_bytes.root()), 2);
    }

    #[test]
    fn should_parse_char_iterators_directly() {
        let source = r#"{
            "test" : 1232.0,
            "some other" : "thasdasd",
            "a bool" : true,
            "an array" : [1,2,3,4,5.8,6,7.2,7,8,10]
        }"#;
        let parser = Parser::default();
        let parsed = parser.parse(&mut source.chars());
        assert!(parsed.is_ok());
    }
}
