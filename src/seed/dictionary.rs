/// Fixed, ordered word list that seed phrases are drawn from
pub trait Dictionary: Send + Sync {
    fn words(&self) -> &[&'static str];

    fn contains(&self, word: &str) -> bool {
        self.words().contains(&word)
    }
}

/// The 2048-word English list
#[derive(Debug, Default, Clone, Copy)]
pub struct Bip39English;

impl Dictionary for Bip39English {
    fn words(&self) -> &[&'static str] {
        bip39::Language::English.word_list()
    }
}

impl Dictionary for Vec<&'static str> {
    fn words(&self) -> &[&'static str] {
        self.as_slice()
    }
}
