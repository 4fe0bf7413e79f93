pub use {
    envelope::ApiResponse,
    out_point::OutPoint,
    rune::{RuneAmount, RuneInject},
    transaction::{Transaction, TxIn, TxOut},
};

pub use ordinals::RuneId;

mod envelope;
mod out_point;
mod rune;
mod transaction;
