//! Command line definitions of the `ckb-replay` executable.
use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command};

/// The executable name.
pub const BIN_NAME: &str = "ckb-replay";

/// Subcommand `convert`.
pub const CMD_CONVERT: &str = "convert";
/// Subcommand `run`.
pub const CMD_RUN: &str = "run";
/// Subcommand `script-hash`.
pub const CMD_SCRIPT_HASH: &str = "script-hash";

/// Path of the config file.
pub const ARG_CONFIG: &str = "config";
/// Network preset.
pub const ARG_NETWORK: &str = "network";
/// Node RPC endpoint.
pub const ARG_RPC: &str = "rpc";
/// Transaction hash to fetch.
pub const ARG_TX_HASH: &str = "tx-hash";
/// Transaction JSON file.
pub const ARG_RAW_TX: &str = "raw-tx";
/// Serialized transaction file.
pub const ARG_PACKED_TX: &str = "packed-tx";
/// Mock transaction file.
pub const ARG_TX_FILE: &str = "tx-file";
/// Where to write the mock transaction.
pub const ARG_OUTPUT: &str = "output";
/// Cycle limit of each script group.
pub const ARG_MAX_CYCLES: &str = "max-cycles";
/// The `ckb-debugger` executable.
pub const ARG_DEBUGGER: &str = "debugger";
/// Index of the selected cell.
pub const ARG_CELL_INDEX: &str = "cell-index";
/// `input` or `output`.
pub const ARG_CELL_TYPE: &str = "cell-type";
/// `lock` or `type`.
pub const ARG_SCRIPT_GROUP_TYPE: &str = "script-group-type";
/// Binary to swap in.
pub const ARG_REPLACE_BINARY: &str = "replace-binary";
/// Code hash of the replaced script code.
pub const ARG_REPLACE_CODE_HASH: &str = "replace-code-hash";
/// Hash type of the replaced script code.
pub const ARG_REPLACE_HASH_TYPE: &str = "replace-hash-type";
/// How the replaced cell dep is located.
pub const ARG_MATCH_MODE: &str = "match-mode";
/// Script code hash.
pub const ARG_CODE_HASH: &str = "code-hash";
/// Script hash type.
pub const ARG_HASH_TYPE: &str = "hash-type";
/// Script args.
pub const ARG_ARGS: &str = "args";

const GROUP_SOURCE: &str = "source";
const HASH_TYPES: [&str; 4] = ["data", "type", "data1", "data2"];

/// The root command.
pub fn basic_app() -> Command {
    Command::new(BIN_NAME)
        .author("Nervos Core Dev <dev@nervos.org>")
        .about("Rebuild CKB transactions as mock transactions and replay their scripts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .term_width(110)
        .arg(
            Arg::new(ARG_CONFIG)
                .global(true)
                .short('c')
                .long(ARG_CONFIG)
                .value_name("path")
                .action(ArgAction::Set)
                .help("Reads options from the TOML config file <path>"),
        )
        .arg(
            Arg::new(ARG_NETWORK)
                .global(true)
                .long(ARG_NETWORK)
                .value_parser(["mainnet", "testnet"])
                .action(ArgAction::Set)
                .help("Fetches from the public node of the network [default: mainnet]"),
        )
        .arg(
            Arg::new(ARG_RPC)
                .global(true)
                .long(ARG_RPC)
                .value_name("url")
                .action(ArgAction::Set)
                .help("Fetches from the node at <url>, overriding --network"),
        )
        .subcommand(convert())
        .subcommand(run())
        .subcommand(script_hash())
}

/// Parses the command line of the process.
pub fn get_matches(version: &str) -> ArgMatches {
    basic_app().version(version.to_owned()).get_matches()
}

fn tx_hash() -> Arg {
    Arg::new(ARG_TX_HASH)
        .long(ARG_TX_HASH)
        .value_name("hash")
        .action(ArgAction::Set)
        .help("Fetches the committed transaction <hash> and everything it depends on")
}

fn raw_tx() -> Arg {
    Arg::new(ARG_RAW_TX)
        .long(ARG_RAW_TX)
        .value_name("path")
        .action(ArgAction::Set)
        .help("Reads the transaction JSON, or a get_transaction result, from <path>")
}

fn packed_tx() -> Arg {
    Arg::new(ARG_PACKED_TX)
        .long(ARG_PACKED_TX)
        .value_name("path")
        .action(ArgAction::Set)
        .help("Reads the hex of a serialized transaction from <path>")
}

fn convert() -> Command {
    Command::new(CMD_CONVERT)
        .about("Converts a transaction into a mock transaction")
        .arg(tx_hash())
        .arg(raw_tx())
        .arg(packed_tx())
        .group(
            ArgGroup::new(GROUP_SOURCE)
                .args([ARG_TX_HASH, ARG_RAW_TX, ARG_PACKED_TX])
                .required(true),
        )
        .arg(
            Arg::new(ARG_OUTPUT)
                .short('o')
                .long(ARG_OUTPUT)
                .value_name("path")
                .action(ArgAction::Set)
                .help("Writes the mock transaction to <path> instead of stdout"),
        )
}

fn run() -> Command {
    Command::new(CMD_RUN)
        .about("Runs the script groups of a transaction with ckb-debugger")
        .arg(
            Arg::new(ARG_TX_FILE)
                .long(ARG_TX_FILE)
                .value_name("path")
                .action(ArgAction::Set)
                .help("Reads the mock transaction from <path>"),
        )
        .arg(tx_hash())
        .arg(raw_tx())
        .arg(packed_tx())
        .group(
            ArgGroup::new(GROUP_SOURCE)
                .args([ARG_TX_FILE, ARG_TX_HASH, ARG_RAW_TX, ARG_PACKED_TX])
                .required(true),
        )
        .arg(
            Arg::new(ARG_MAX_CYCLES)
                .long(ARG_MAX_CYCLES)
                .value_name("cycles")
                .value_parser(clap::value_parser!(u64))
                .action(ArgAction::Set)
                .help("Limits the cycles of each script group [default: 3500000000]"),
        )
        .arg(
            Arg::new(ARG_DEBUGGER)
                .long(ARG_DEBUGGER)
                .value_name("path")
                .action(ArgAction::Set)
                .help("Uses the ckb-debugger executable at <path>"),
        )
        .arg(
            Arg::new(ARG_CELL_INDEX)
                .long(ARG_CELL_INDEX)
                .value_name("index")
                .value_parser(clap::value_parser!(usize))
                .action(ArgAction::Set)
                .requires(ARG_CELL_TYPE)
                .requires(ARG_SCRIPT_GROUP_TYPE)
                .help("Runs only the script of the cell <index>"),
        )
        .arg(
            Arg::new(ARG_CELL_TYPE)
                .long(ARG_CELL_TYPE)
                .value_parser(["input", "output"])
                .action(ArgAction::Set)
                .requires(ARG_CELL_INDEX)
                .help("Whether --cell-index refers to an input or an output"),
        )
        .arg(
            Arg::new(ARG_SCRIPT_GROUP_TYPE)
                .long(ARG_SCRIPT_GROUP_TYPE)
                .value_parser(["lock", "type"])
                .action(ArgAction::Set)
                .requires(ARG_CELL_INDEX)
                .help("Runs the lock or the type script of the selected cell"),
        )
        .arg(
            Arg::new(ARG_REPLACE_BINARY)
                .long(ARG_REPLACE_BINARY)
                .value_name("path")
                .action(ArgAction::Set)
                .help("Swaps the script code with the binary at <path> before running"),
        )
        .arg(
            Arg::new(ARG_REPLACE_CODE_HASH)
                .long(ARG_REPLACE_CODE_HASH)
                .value_name("hash")
                .action(ArgAction::Set)
                .requires(ARG_REPLACE_BINARY)
                .requires(ARG_REPLACE_HASH_TYPE)
                .help(
                    "The code hash of the replaced code, by default the selected script, or the \
                     first script group when running every group",
                ),
        )
        .arg(
            Arg::new(ARG_REPLACE_HASH_TYPE)
                .long(ARG_REPLACE_HASH_TYPE)
                .value_parser(HASH_TYPES)
                .action(ArgAction::Set)
                .requires(ARG_REPLACE_CODE_HASH)
                .help("The hash type of the replaced code"),
        )
        .arg(
            Arg::new(ARG_MATCH_MODE)
                .long(ARG_MATCH_MODE)
                .value_parser(["data-hash", "lock-code-hash", "either"])
                .action(ArgAction::Set)
                .requires(ARG_REPLACE_BINARY)
                .help("How the cell dep holding the replaced code is found [default: data-hash]"),
        )
}

fn script_hash() -> Command {
    Command::new(CMD_SCRIPT_HASH)
        .about("Prints the hash of a script")
        .arg(
            Arg::new(ARG_CODE_HASH)
                .long(ARG_CODE_HASH)
                .value_name("hash")
                .required(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(ARG_HASH_TYPE)
                .long(ARG_HASH_TYPE)
                .value_parser(HASH_TYPES)
                .required(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(ARG_ARGS)
                .long(ARG_ARGS)
                .value_name("hex")
                .action(ArgAction::Set)
                .help("0x-prefixed hex of the script args [default: 0x]"),
        )
}
