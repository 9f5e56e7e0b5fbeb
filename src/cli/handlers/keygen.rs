use crate::cli::{args::KeygenArgs, config::create_codec, global::GlobalArgs};
use base8x::{AlphabetRegistry, keygen};

pub fn handle(
    args: KeygenArgs,
    _global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.bits == 0 {
        return Err("--bits must be greater than 0".into());
    }

    let codec = create_codec(config, Some(args.alphabet.as_str()))?;
    let mut rng = rand::rng();
    let lines = keygen::render_keys(&codec, args.bits, args.count, args.format.into(), &mut rng);

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
