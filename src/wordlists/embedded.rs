//! Built-in demonstration games
//!
//! Small word lists with a known secret, used by the `compare` command and
//! by tests.

/// A word list together with the secret hidden in it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    pub name: &'static str,
    pub secret: &'static str,
    pub words: &'static [&'static str],
}

/// Every built-in game, in report order
pub const FIXTURES: &[Fixture] = &[
    Fixture {
        name: "secret-first",
        secret: "acckzz",
        words: &["acckzz", "ccbazz", "eiowzz", "abcczz"],
    },
    Fixture {
        name: "secret-fourth",
        secret: "acckzz",
        words: &["ccbazz", "eiowzz", "abcczz", "acckzz", "xyzzzz"],
    },
    Fixture {
        name: "pair",
        secret: "hamada",
        words: &["hamada", "khaled"],
    },
    Fixture {
        name: "rotations",
        secret: "abcdef",
        words: &["abcdef", "fedcba", "bcdefa", "abcxyz", "xydefz"],
    },
    Fixture {
        name: "rotations-padded",
        secret: "abcdef",
        words: &[
            "abcdef", "fedcba", "bcdefa", "abcxyz", "xydefz", "aabbcc", "dddddd",
        ],
    },
];

/// Number of built-in games
pub const FIXTURES_COUNT: usize = FIXTURES.len();
