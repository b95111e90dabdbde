mod codec;

pub use codec::HickoryWireCodec;
