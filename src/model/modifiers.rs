use bitflags::bitflags;

bitflags! {
    /// Declaration modifiers of a type, method or field.
    ///
    /// "package" visibility is not a flag: it is the absence of all three
    /// explicit access modifiers (see [`Modifiers::is_package`]).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u16 {
        const PUBLIC       = 0x0001;
        const PRIVATE      = 0x0002;
        const PROTECTED    = 0x0004;
        const STATIC       = 0x0008;
        const FINAL        = 0x0010;
        const SYNCHRONIZED = 0x0020;
        const VOLATILE     = 0x0040;
        const TRANSIENT    = 0x0080;
        const NATIVE       = 0x0100;
        const ABSTRACT     = 0x0400;
        const STRICT       = 0x0800;
    }
}

/// Rendering order of modifier keywords.
const KEYWORD_ORDER: [(Modifiers, &str); 11] = [
    (Modifiers::PUBLIC, "public"),
    (Modifiers::PROTECTED, "protected"),
    (Modifiers::PRIVATE, "private"),
    (Modifiers::ABSTRACT, "abstract"),
    (Modifiers::STATIC, "static"),
    (Modifiers::FINAL, "final"),
    (Modifiers::TRANSIENT, "transient"),
    (Modifiers::VOLATILE, "volatile"),
    (Modifiers::SYNCHRONIZED, "synchronized"),
    (Modifiers::NATIVE, "native"),
    (Modifiers::STRICT, "strictfp"),
];

impl Modifiers {
    const ACCESS: Modifiers = Modifiers::PUBLIC
        .union(Modifiers::PROTECTED)
        .union(Modifiers::PRIVATE);

    /// Parse a single modifier keyword as written in source code.
    ///
    /// `strict` is accepted as an alias of `strictfp`.
    pub fn from_keyword(word: &str) -> Option<Self> {
        KEYWORD_ORDER
            .iter()
            .find(|(_, keyword)| *keyword == word)
            .map(|(flag, _)| *flag)
            .or_else(|| (word == "strict").then_some(Modifiers::STRICT))
    }

    /// True when none of `public`, `protected` or `private` is present.
    pub fn is_package(self) -> bool {
        !self.intersects(Self::ACCESS)
    }

    /// Keywords of the set flags in canonical declaration order.
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        KEYWORD_ORDER
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, keyword)| keyword)
    }
}
