use crate::cli::{
    args::DecodeArgs,
    config::{create_codec, read_input, write_output},
    global::GlobalArgs,
};
use base8x::AlphabetRegistry;

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = create_codec(config, args.alphabet.as_deref())?;
    let input = read_input(args.file.as_ref(), global)?;
    let text =
        String::from_utf8(input).map_err(|_| "Input data is not valid UTF-8 text for decoding")?;

    // Alphabets may contain a space, so only line breaks are trimmed.
    let decoded = codec.decode(text.trim_end_matches(['\r', '\n']))?;

    write_output(args.output.as_ref(), &decoded)
}
