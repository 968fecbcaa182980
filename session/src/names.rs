//! Fun store-name generation.
//!
//! Stores that arrive without a name get an `adjective-adjective-noun`
//! identifier, good enough to be unique in practice and friendly enough to
//! appear in a URL.

const ADJECTIVES: &[&str] = &[
    "adorable",
    "beautiful",
    "clean",
    "drab",
    "elegant",
    "fancy",
    "glamorous",
    "handsome",
    "long",
    "magnificent",
    "old-fashioned",
    "plain",
    "quaint",
    "sparkling",
    "ugliest",
    "unsightly",
    "angry",
    "bewildered",
    "clumsy",
    "defeated",
    "embarrassed",
    "fierce",
    "grumpy",
    "helpless",
    "itchy",
    "jealous",
];

const NOUNS: &[&str] = &[
    "women",
    "men",
    "children",
    "teeth",
    "feet",
    "people",
    "leaves",
    "mice",
    "geese",
    "halves",
    "knives",
    "wives",
    "lives",
    "elves",
    "loaves",
    "potatoes",
    "tomatoes",
    "cacti",
    "foxes",
];

/// Generate a fun `adjective-adjective-noun` store name.
pub fn fun_name() -> String {
    let bytes = *uuid::Uuid::new_v4().as_bytes();
    fn pick<'a>(list: &'a [&'a str], byte: u8) -> &'a str {
        list[byte as usize % list.len()]
    }

    format!(
        "{}-{}-{}",
        pick(ADJECTIVES, bytes[0]),
        pick(ADJECTIVES, bytes[1]),
        pick(NOUNS, bytes[2])
    )
}
