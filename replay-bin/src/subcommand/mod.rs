mod convert;
mod run;
mod script_hash;

pub use self::convert::convert;
pub use self::run::run;
pub use self::script_hash::script_hash;
