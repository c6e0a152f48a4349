use crate::{
    builder::FixtureBuilder, error::ParseError, mock_tx::MockTransaction,
    progress::ProgressReporter,
};
use ckb_replay_error::Error;
use ckb_replay_jsonrpc_types::{Transaction as JsonTransaction, Uint128};
use ckb_replay_rpc_client::ChainProvider;
use ckb_replay_types::{core::Transaction, packed::Entity, H256};
use serde_json::Value;

/// Where the transaction to replay comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TxSource {
    /// A committed transaction, fetched by hash.
    Hash(H256),
    /// The JSON of a transaction, or of a `get_transaction` result.
    RawJson(String),
    /// The hex of a molecule serialized `Transaction`.
    Packed(String),
    /// An existing mock transaction file.
    Fixture(String),
}

impl TxSource {
    /// Parses a transaction hash, with or without the `0x` prefix.
    pub fn from_hash_str(hash: &str) -> Result<Self, Error> {
        H256::from_hex_str(hash.trim())
            .map(TxSource::Hash)
            .map_err(|_| ParseError::Hash(hash.to_owned()).into())
    }

    /// Produces the mock transaction, fetching from `provider` whatever the source lacks.
    pub async fn into_mock_transaction<P, R>(
        self,
        provider: &P,
        reporter: &mut R,
    ) -> Result<MockTransaction, Error>
    where
        P: ChainProvider + ?Sized,
        R: ProgressReporter,
    {
        let builder = FixtureBuilder::new(provider);
        match self {
            TxSource::Hash(hash) => builder.build_from_hash(&hash, reporter).await,
            TxSource::RawJson(text) => builder.build(parse_raw_tx(&text)?, reporter).await,
            TxSource::Packed(text) => builder.build(parse_packed_tx(&text)?, reporter).await,
            TxSource::Fixture(text) => parse_fixture(&text),
        }
    }
}

/// Parses a mock transaction file.
pub fn parse_fixture(text: &str) -> Result<MockTransaction, Error> {
    MockTransaction::from_json(text)
}

/// Parses a molecule serialized `Transaction` written as hex, with or without `0x`.
pub fn parse_packed_tx(text: &str) -> Result<Transaction, Error> {
    let text = text.trim();
    let hex = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if hex.len() % 2 != 0 {
        return Err(ParseError::Hex(format!("odd length {}", hex.len())).into());
    }
    let mut bytes = vec![0u8; hex.len() / 2];
    faster_hex::hex_decode(hex.as_bytes(), &mut bytes)
        .map_err(|err| ParseError::Hex(format!("{:?}", err)))?;
    Transaction::from_slice(&bytes).map_err(|err| ParseError::Molecule(err).into())
}

/// Parses the JSON of a transaction as written by people and other tools.
///
/// Besides the RPC encoding this accepts:
///
/// * a `get_transaction` result, the transaction is taken from its `transaction` field,
/// * a `hash` field next to the transaction fields, which is ignored,
/// * integers as JSON numbers, decimal strings or hex strings in any case,
/// * `depGroup` and `DepGroup` for the dep type `dep_group`,
/// * a missing output `type`.
pub fn parse_raw_tx(text: &str) -> Result<Transaction, Error> {
    let mut value: Value = serde_json::from_str(text).map_err(ParseError::from)?;
    let inner = value.get_mut("transaction").map(Value::take);
    if let Some(inner) = inner {
        value = inner;
    }
    normalize_transaction(&mut value)?;
    let tx: JsonTransaction = serde_json::from_value(value).map_err(ParseError::from)?;
    Ok(tx.into())
}

fn normalize_transaction(tx: &mut Value) -> Result<(), ParseError> {
    let object = tx.as_object_mut().ok_or_else(|| ParseError::Field {
        field: "transaction".to_owned(),
        reason: "not an object".to_owned(),
    })?;
    object.remove("hash");

    if let Some(version) = object.get_mut("version") {
        normalize_number(version, "version")?;
    }
    for dep in array_items(object.get_mut("cell_deps")) {
        if let Some(index) = dep.pointer_mut("/out_point/index") {
            normalize_number(index, "cell_deps.out_point.index")?;
        }
        if let Some(dep_type) = dep.get_mut("dep_type") {
            normalize_dep_type(dep_type);
        }
    }
    for input in array_items(object.get_mut("inputs")) {
        if let Some(since) = input.get_mut("since") {
            normalize_number(since, "inputs.since")?;
        }
        if let Some(index) = input.pointer_mut("/previous_output/index") {
            normalize_number(index, "inputs.previous_output.index")?;
        }
    }
    for output in array_items(object.get_mut("outputs")) {
        if let Some(capacity) = output.get_mut("capacity") {
            normalize_number(capacity, "outputs.capacity")?;
        }
        if let Some(output) = output.as_object_mut() {
            output.entry("type").or_insert(Value::Null);
        }
    }
    Ok(())
}

fn array_items<'a>(value: Option<&'a mut Value>) -> impl Iterator<Item = &'a mut Value> {
    value
        .and_then(Value::as_array_mut)
        .into_iter()
        .flat_map(|items| items.iter_mut())
}

/// Rewrites a number into the canonical `0x` hex string.
///
/// Range checks are left to the typed deserialization.
fn normalize_number(value: &mut Value, field: &str) -> Result<(), ParseError> {
    let invalid = |reason: String| ParseError::Field {
        field: field.to_owned(),
        reason,
    };
    let number = match value {
        Value::Number(number) => number
            .as_u64()
            .map(u128::from)
            .ok_or_else(|| invalid(format!("{} is not an unsigned integer", number)))?,
        Value::String(text) => Uint128::from_loose_str(text)
            .map_err(|err| invalid(format!("{:?}: {}", text, err)))?
            .value(),
        other => return Err(invalid(format!("unexpected {}", other))),
    };
    *value = Value::String(format!("{:#x}", number));
    Ok(())
}

fn normalize_dep_type(value: &mut Value) {
    if let Value::String(text) = value {
        match text.as_str() {
            "depGroup" | "DepGroup" => *text = "dep_group".to_owned(),
            _ => *text = text.to_lowercase(),
        }
    }
}
