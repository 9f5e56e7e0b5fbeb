use crate::cli::{
    args::EncodeArgs,
    config::{create_codec, read_input, write_output},
    global::GlobalArgs,
};
use base8x::AlphabetRegistry;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = create_codec(config, args.alphabet.as_deref())?;
    let data = read_input(args.file.as_ref(), global)?;

    let mut encoded = codec.encode(&data);
    encoded.push('\n');

    write_output(args.output.as_ref(), encoded.as_bytes())
}
