//! EIP-712 typed data utilities
//!
//! Hashing follows version 4 of the EIP-712 encoding as produced by browser
//! wallets: arrays and nested structs are supported, a `null` struct value
//! encodes as 32 zero bytes, and integers may be given as JSON numbers,
//! decimal strings or `0x` hex strings.

use crate::{Result, SdkError};
use ethereum_types::{H256, U256};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Name of the domain struct type
pub const DOMAIN_TYPE: &str = "EIP712Domain";

/// EIP-712 prefix for the final digest
const EIP712_PREFIX: [u8; 2] = [0x19, 0x01];

/// A single member of an EIP-712 struct type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedDataField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

impl TypedDataField {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
        }
    }
}

/// EIP-712 typed data document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedData {
    pub types: BTreeMap<String, Vec<TypedDataField>>,
    pub primary_type: String,
    pub domain: Value,
    pub message: Value,
}

impl TypedData {
    /// Create a new typed data document
    pub fn new(
        types: BTreeMap<String, Vec<TypedDataField>>,
        primary_type: impl Into<String>,
        domain: Value,
        message: Value,
    ) -> Self {
        Self {
            types,
            primary_type: primary_type.into(),
            domain,
            message,
        }
    }

    /// Parse a document from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the document as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// `hashStruct(EIP712Domain, domain)`
    pub fn domain_separator(&self) -> Result<[u8; 32]> {
        self.hash_struct(DOMAIN_TYPE, &self.domain)
    }

    /// `hashStruct(primaryType, message)`
    pub fn struct_hash(&self) -> Result<[u8; 32]> {
        self.hash_struct(&self.primary_type, &self.message)
    }

    /// The digest a wallet signs: `keccak256(0x1901 || domainSeparator || structHash)`
    pub fn signing_hash(&self) -> Result<[u8; 32]> {
        let mut data = Vec::with_capacity(2 + 32 + 32);
        data.extend_from_slice(&EIP712_PREFIX);
        data.extend_from_slice(&self.domain_separator()?);
        if self.primary_type != DOMAIN_TYPE {
            data.extend_from_slice(&self.struct_hash()?);
        }

        Ok(keccak256(&data))
    }

    /// Encode a struct type with its dependencies, e.g. `Mail(Person from)Person(string name)`
    pub fn encode_type(&self, type_name: &str) -> Result<String> {
        let fields = self.fields(type_name).ok_or_else(|| {
            SdkError::invalid_typed_data(format!("No type definition for {}", type_name))
        })?;

        let mut deps = Vec::new();
        for field in fields {
            self.collect_dependencies(&field.field_type, &mut deps);
        }
        deps.retain(|dep| dep != type_name);
        deps.sort();

        let mut encoded = format_type(type_name, fields);
        for dep in deps {
            encoded.push_str(&format_type(&dep, &self.types[&dep]));
        }

        Ok(encoded)
    }

    /// `keccak256(encodeType(type))`
    pub fn type_hash(&self, type_name: &str) -> Result<[u8; 32]> {
        Ok(keccak256(self.encode_type(type_name)?.as_bytes()))
    }

    /// `keccak256(typeHash || encodeData(data))`
    pub fn hash_struct(&self, type_name: &str, data: &Value) -> Result<[u8; 32]> {
        Ok(keccak256(&self.encode_data(type_name, data)?))
    }

    fn fields(&self, type_name: &str) -> Option<&[TypedDataField]> {
        match self.types.get(type_name) {
            Some(fields) => Some(fields.as_slice()),
            // Documents may omit the domain type entirely
            None if type_name == DOMAIN_TYPE => Some(&[]),
            None => None,
        }
    }

    fn collect_dependencies(&self, field_type: &str, found: &mut Vec<String>) {
        let base = base_type_name(field_type);
        if found.iter().any(|t| t == base) {
            return;
        }
        if let Some(fields) = self.types.get(base) {
            found.push(base.to_string());
            for field in fields {
                self.collect_dependencies(&field.field_type, found);
            }
        }
    }

    fn encode_data(&self, type_name: &str, data: &Value) -> Result<Vec<u8>> {
        let fields = self.fields(type_name).ok_or_else(|| {
            SdkError::invalid_typed_data(format!("No type definition for {}", type_name))
        })?;
        let object = data.as_object().ok_or_else(|| {
            SdkError::invalid_typed_data(format!("Value of {} must be an object", type_name))
        })?;

        let mut encoded = Vec::with_capacity(32 * (fields.len() + 1));
        encoded.extend_from_slice(&self.type_hash(type_name)?);
        for field in fields {
            let word = self.encode_field(&field.name, &field.field_type, object.get(&field.name))?;
            encoded.extend_from_slice(&word);
        }

        Ok(encoded)
    }

    fn encode_field(&self, name: &str, field_type: &str, value: Option<&Value>) -> Result<[u8; 32]> {
        if self.types.contains_key(field_type) {
            return match value {
                None | Some(Value::Null) => Ok([0u8; 32]),
                Some(value) => self.hash_struct(field_type, value),
            };
        }

        let value = value.ok_or_else(|| {
            SdkError::invalid_typed_data(format!(
                "Missing value for field {} of type {}",
                name, field_type
            ))
        })?;

        match field_type {
            "string" => return Ok(keccak256(&string_bytes(name, value)?)),
            "bytes" => return Ok(keccak256(&dynamic_bytes(name, value)?)),
            _ => {}
        }

        if field_type.ends_with(']') {
            if let Some(open) = field_type.rfind('[') {
                let element_type = &field_type[..open];
                let items = value.as_array().ok_or_else(|| {
                    SdkError::invalid_typed_data(format!("Field {} must be an array", name))
                })?;

                let length = &field_type[open + 1..field_type.len() - 1];
                if !length.is_empty() && length.parse::<usize>().ok() != Some(items.len()) {
                    return Err(SdkError::invalid_typed_data(format!(
                        "Field {} expects {} elements, got {}",
                        name,
                        length,
                        items.len()
                    )));
                }

                let mut encoded = Vec::with_capacity(items.len() * 32);
                for item in items {
                    encoded.extend_from_slice(&self.encode_field(name, element_type, Some(item))?);
                }
                return Ok(keccak256(&encoded));
            }
        }

        encode_atomic(name, field_type, value)
    }
}

/// Hash EIP-712 typed data
pub fn hash_typed_data(typed_data: &TypedData) -> Result<H256> {
    Ok(H256::from(typed_data.signing_hash()?))
}

/// Keccak-256 hash function
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    use sha3::{Digest, Keccak256};
    Keccak256::digest(data).into()
}

fn format_type(type_name: &str, fields: &[TypedDataField]) -> String {
    let members = fields
        .iter()
        .map(|field| format!("{} {}", field.field_type, field.name))
        .collect::<Vec<_>>()
        .join(",");
    format!("{}({})", type_name, members)
}

/// Leading identifier of a type, dropping any array suffix
fn base_type_name(field_type: &str) -> &str {
    let end = field_type
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(field_type.len());
    &field_type[..end]
}

fn encode_atomic(name: &str, field_type: &str, value: &Value) -> Result<[u8; 32]> {
    if field_type == "address" {
        let (negative, number) = parse_integer(name, value)?;
        if negative || number.bits() > 160 {
            return Err(SdkError::invalid_typed_data(format!(
                "Field {} is not a valid address",
                name
            )));
        }
        return Ok(u256_word(number));
    }

    if field_type == "bool" {
        let flag = match value {
            Value::Bool(flag) => *flag,
            Value::Number(n) if n.as_u64() == Some(0) => false,
            Value::Number(n) if n.as_u64() == Some(1) => true,
            Value::String(s) if s == "true" => true,
            Value::String(s) if s == "false" => false,
            _ => {
                return Err(SdkError::invalid_typed_data(format!(
                    "Field {} must be a boolean",
                    name
                )))
            }
        };
        return Ok(u256_word(U256::from(flag as u8)));
    }

    if let Some(size) = field_type.strip_prefix("bytes") {
        let size = parse_size(name, size, 32)?;
        let bytes = dynamic_bytes(name, value)?;
        if bytes.len() > size {
            return Err(SdkError::invalid_typed_data(format!(
                "Field {} holds {} bytes, expected at most {}",
                name,
                bytes.len(),
                size
            )));
        }
        let mut word = [0u8; 32];
        word[..bytes.len()].copy_from_slice(&bytes);
        return Ok(word);
    }

    if let Some(bits) = field_type.strip_prefix("uint") {
        let bits = parse_size(name, bits, 256)?;
        let (negative, number) = parse_integer(name, value)?;
        if negative || number.bits() > bits {
            return Err(SdkError::invalid_typed_data(format!(
                "Field {} does not fit {}",
                name, field_type
            )));
        }
        return Ok(u256_word(number));
    }

    if let Some(bits) = field_type.strip_prefix("int") {
        let bits = parse_size(name, bits, 256)?;
        let (negative, magnitude) = parse_integer(name, value)?;
        if magnitude.bits() > bits {
            return Err(SdkError::invalid_typed_data(format!(
                "Field {} does not fit {}",
                name, field_type
            )));
        }
        let number = if negative && !magnitude.is_zero() {
            (!magnitude).overflowing_add(U256::one()).0
        } else {
            magnitude
        };
        return Ok(u256_word(number));
    }

    Err(SdkError::invalid_typed_data(format!(
        "Unsupported type {} for field {}",
        field_type, name
    )))
}

/// Bit or byte width suffix of `uintN`/`intN`/`bytesN`; empty means the maximum
fn parse_size(name: &str, size: &str, max: usize) -> Result<usize> {
    if size.is_empty() {
        return Ok(max);
    }
    match size.parse::<usize>() {
        Ok(n) if n > 0 && n <= max => Ok(n),
        _ => Err(SdkError::invalid_typed_data(format!(
            "Invalid type width {} for field {}",
            size, name
        ))),
    }
}

/// Parse an integer into (is_negative, magnitude)
fn parse_integer(name: &str, value: &Value) -> Result<(bool, U256)> {
    let invalid = || SdkError::invalid_typed_data(format!("Field {} is not a valid integer", name));

    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Ok((false, U256::from(u)))
            } else if let Some(i) = n.as_i64() {
                Ok((true, U256::from(i.unsigned_abs())))
            } else {
                Err(invalid())
            }
        }
        Value::String(s) => {
            let s = s.trim();
            let (negative, digits) = match s.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, s),
            };
            let magnitude = match digits
                .strip_prefix("0x")
                .or_else(|| digits.strip_prefix("0X"))
            {
                Some(hex_digits) if !hex_digits.is_empty() => {
                    U256::from_str_radix(hex_digits, 16).map_err(|_| invalid())?
                }
                Some(_) => return Err(invalid()),
                None => U256::from_dec_str(digits).map_err(|_| invalid())?,
            };
            Ok((negative, magnitude))
        }
        _ => Err(invalid()),
    }
}

fn string_bytes(name: &str, value: &Value) -> Result<Vec<u8>> {
    match value {
        Value::String(s) => Ok(s.as_bytes().to_vec()),
        Value::Null => Ok(Vec::new()),
        Value::Number(_) => number_bytes(name, value),
        _ => Err(SdkError::invalid_typed_data(format!(
            "Field {} must be a string",
            name
        ))),
    }
}

/// `bytes` values: hex strings are decoded, any other string is taken as UTF-8
fn dynamic_bytes(name: &str, value: &Value) -> Result<Vec<u8>> {
    match value {
        Value::String(s) => match s.strip_prefix("0x") {
            Some(digits) if digits.chars().all(|c| c.is_ascii_hexdigit()) => {
                if digits.len() % 2 == 1 {
                    Ok(hex::decode(format!("0{}", digits))?)
                } else {
                    Ok(hex::decode(digits)?)
                }
            }
            _ => Ok(s.as_bytes().to_vec()),
        },
        Value::Number(_) => number_bytes(name, value),
        _ => Err(SdkError::invalid_typed_data(format!(
            "Field {} must be bytes",
            name
        ))),
    }
}

/// Minimal big-endian bytes of a non-negative JSON number
fn number_bytes(name: &str, value: &Value) -> Result<Vec<u8>> {
    let n = value.as_u64().ok_or_else(|| {
        SdkError::invalid_typed_data(format!("Field {} must be a non-negative integer", name))
    })?;
    let bytes = n.to_be_bytes();
    let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len() - 1);
    Ok(bytes[first..].to_vec())
}

fn u256_word(value: U256) -> [u8; 32] {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    word
}
