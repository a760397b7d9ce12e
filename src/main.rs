use lacinka::{Engine, Settings, Trasianka, Variant};
use std::borrow::Cow;
use std::error::Error;
use std::io::Read;
use std::path::Path;
use std::{env, fs, io};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let dir = env::args()
        .nth(1)
        .ok_or("usage: lacinka <tables-dir> [classic|official|none] < input.txt")?;
    let variant = match env::args().nth(2).as_deref() {
        None | Some("classic") => Some(Variant::Classic),
        Some("official") => Some(Variant::Official),
        Some("none") => None,
        Some(other) => return Err(format!("unknown variant `{other}`").into()),
    };

    let dir = Path::new(&dir);
    let read = |name: &str| fs::read_to_string(dir.join(name));

    let engine = Engine::builder()
        .dictionary(&read("dictionary.ru-be.txt")?)
        .endings(&read("endings.ru.txt")?, &read("endings.be.txt")?)
        .word_forms(&read("forms.ru-be.txt").unwrap_or_default())
        .phrases(&read("phrases.ru-be.txt").unwrap_or_default())
        .prefixes(&read("prefixes.ru-be.txt").unwrap_or_default())
        .phonetic(Trasianka::parse(&read("trasianka.txt")?))
        .variant(Variant::Classic, &read("lacinka.classic.txt")?)
        .variant(
            Variant::Official,
            &read("lacinka.official.txt").unwrap_or_default(),
        )
        .settings(Settings {
            translate: true,
            transliterate: variant,
        })
        .build()?;

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let output = engine.process(Cow::Owned(input))?;
    print!("{output}");
    Ok(())
}
