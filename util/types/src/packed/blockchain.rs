use super::{
    read_table, verify_fixed_size, write_offsets_and_parts, Entity, VerificationError,
    VerificationResult,
};
use crate::{
    bytes::Bytes,
    core::{
        CellDep, CellInput, CellOutput, DepType, Header, OutPoint, Script, ScriptHashType,
        Transaction,
    },
    H256,
};

macro_rules! impl_entity_for_byte_enum {
    ($type:ident, $name:literal, $max:literal) => {
        impl Entity for $type {
            const NAME: &'static str = $name;
            const FIXED_SIZE: Option<usize> = Some(1);

            fn write_to(&self, out: &mut Vec<u8>) {
                out.push((*self).into());
            }

            fn from_slice(slice: &[u8]) -> VerificationResult<Self> {
                verify_fixed_size(Self::NAME, slice, 1)?;
                $type::try_from(slice[0]).map_err(|_| {
                    VerificationError::UnknownItem(Self::NAME.to_owned(), $max, slice[0].into())
                })
            }
        }
    };
}

impl_entity_for_byte_enum!(ScriptHashType, "ScriptHashType", 5);
impl_entity_for_byte_enum!(DepType, "DepType", 2);

impl Entity for Script {
    const NAME: &'static str = "Script";

    fn write_to(&self, out: &mut Vec<u8>) {
        write_offsets_and_parts(
            out,
            &[
                self.code_hash.as_vec(),
                self.hash_type.as_vec(),
                self.args.as_vec(),
            ],
        );
    }

    fn from_slice(slice: &[u8]) -> VerificationResult<Self> {
        let fields = read_table(Self::NAME, slice, 3)?;
        Ok(Script {
            code_hash: <H256 as Entity>::from_slice(fields[0])?,
            hash_type: ScriptHashType::from_slice(fields[1])?,
            args: Bytes::from_slice(fields[2])?,
        })
    }
}

impl Entity for OutPoint {
    const NAME: &'static str = "OutPoint";
    const FIXED_SIZE: Option<usize> = Some(36);

    fn write_to(&self, out: &mut Vec<u8>) {
        self.tx_hash.write_to(out);
        self.index.write_to(out);
    }

    fn from_slice(slice: &[u8]) -> VerificationResult<Self> {
        verify_fixed_size(Self::NAME, slice, 36)?;
        Ok(OutPoint {
            tx_hash: <H256 as Entity>::from_slice(&slice[..32])?,
            index: u32::from_slice(&slice[32..])?,
        })
    }
}

impl Entity for CellInput {
    const NAME: &'static str = "CellInput";
    const FIXED_SIZE: Option<usize> = Some(44);

    fn write_to(&self, out: &mut Vec<u8>) {
        self.since.write_to(out);
        self.previous_output.write_to(out);
    }

    fn from_slice(slice: &[u8]) -> VerificationResult<Self> {
        verify_fixed_size(Self::NAME, slice, 44)?;
        Ok(CellInput {
            since: u64::from_slice(&slice[..8])?,
            previous_output: OutPoint::from_slice(&slice[8..])?,
        })
    }
}

impl Entity for CellDep {
    const NAME: &'static str = "CellDep";
    const FIXED_SIZE: Option<usize> = Some(37);

    fn write_to(&self, out: &mut Vec<u8>) {
        self.out_point.write_to(out);
        self.dep_type.write_to(out);
    }

    fn from_slice(slice: &[u8]) -> VerificationResult<Self> {
        verify_fixed_size(Self::NAME, slice, 37)?;
        Ok(CellDep {
            out_point: OutPoint::from_slice(&slice[..36])?,
            dep_type: DepType::from_slice(&slice[36..])?,
        })
    }
}

impl Entity for CellOutput {
    const NAME: &'static str = "CellOutput";

    fn write_to(&self, out: &mut Vec<u8>) {
        write_offsets_and_parts(
            out,
            &[
                self.capacity.as_vec(),
                self.lock.as_vec(),
                self.type_.as_vec(),
            ],
        );
    }

    fn from_slice(slice: &[u8]) -> VerificationResult<Self> {
        let fields = read_table(Self::NAME, slice, 3)?;
        Ok(CellOutput {
            capacity: u64::from_slice(fields[0])?,
            lock: Script::from_slice(fields[1])?,
            type_: Option::<Script>::from_slice(fields[2])?,
        })
    }
}

impl Transaction {
    /// The molecule encoding of `RawTransaction`, i.e. the transaction without witnesses.
    pub fn raw_as_vec(&self) -> Vec<u8> {
        let mut out = Vec::new();
        write_offsets_and_parts(
            &mut out,
            &[
                self.version.as_vec(),
                self.cell_deps.as_vec(),
                self.header_deps.as_vec(),
                self.inputs.as_vec(),
                self.outputs.as_vec(),
                self.outputs_data.as_vec(),
            ],
        );
        out
    }

    fn raw_from_slice(slice: &[u8]) -> VerificationResult<Self> {
        let fields = read_table("RawTransaction", slice, 6)?;
        Ok(Transaction {
            version: u32::from_slice(fields[0])?,
            cell_deps: Vec::<CellDep>::from_slice(fields[1])?,
            header_deps: Vec::<H256>::from_slice(fields[2])?,
            inputs: Vec::<CellInput>::from_slice(fields[3])?,
            outputs: Vec::<CellOutput>::from_slice(fields[4])?,
            outputs_data: Vec::<Bytes>::from_slice(fields[5])?,
            witnesses: Vec::new(),
        })
    }
}

impl Entity for Transaction {
    const NAME: &'static str = "Transaction";

    fn write_to(&self, out: &mut Vec<u8>) {
        write_offsets_and_parts(out, &[self.raw_as_vec(), self.witnesses.as_vec()]);
    }

    fn from_slice(slice: &[u8]) -> VerificationResult<Self> {
        let fields = read_table(Self::NAME, slice, 2)?;
        let mut tx = Transaction::raw_from_slice(fields[0])?;
        tx.witnesses = Vec::<Bytes>::from_slice(fields[1])?;
        Ok(tx)
    }
}

impl Entity for Header {
    const NAME: &'static str = "Header";
    const FIXED_SIZE: Option<usize> = Some(208);

    fn write_to(&self, out: &mut Vec<u8>) {
        self.version.write_to(out);
        self.compact_target.write_to(out);
        self.timestamp.write_to(out);
        self.number.write_to(out);
        self.epoch.write_to(out);
        self.parent_hash.write_to(out);
        self.transactions_root.write_to(out);
        self.proposals_hash.write_to(out);
        self.extra_hash.write_to(out);
        self.dao.write_to(out);
        self.nonce.write_to(out);
    }

    fn from_slice(slice: &[u8]) -> VerificationResult<Self> {
        verify_fixed_size(Self::NAME, slice, 208)?;
        Ok(Header {
            version: u32::from_slice(&slice[0..4])?,
            compact_target: u32::from_slice(&slice[4..8])?,
            timestamp: u64::from_slice(&slice[8..16])?,
            number: u64::from_slice(&slice[16..24])?,
            epoch: u64::from_slice(&slice[24..32])?,
            parent_hash: <H256 as Entity>::from_slice(&slice[32..64])?,
            transactions_root: <H256 as Entity>::from_slice(&slice[64..96])?,
            proposals_hash: <H256 as Entity>::from_slice(&slice[96..128])?,
            extra_hash: <H256 as Entity>::from_slice(&slice[128..160])?,
            dao: <H256 as Entity>::from_slice(&slice[160..192])?,
            nonce: u128::from_slice(&slice[192..208])?,
        })
    }
}
