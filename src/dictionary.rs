// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;

pub trait WordValidator {
    // case-insensitive
    fn is_valid(&self, word: &str) -> bool;
}

#[derive(Default)]
pub struct Dictionary {
    words: std::collections::HashSet<String>,
}

impl Dictionary {
    pub fn from_words<I: IntoIterator<Item = S>, S: AsRef<str>>(words: I) -> Self {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_ascii_uppercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    // one word per line; anything after the first tab is ignored.
    pub fn from_reader<R: std::io::Read>(reader: R) -> error::Returns<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);
        let mut words = std::collections::HashSet::new();
        for result in csv_reader.records() {
            let record = result?;
            if let Some(word) = record.get(0) {
                let word = word.trim();
                if !word.is_empty() {
                    words.insert(word.to_ascii_uppercase());
                }
            }
        }
        Ok(Self { words })
    }

    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> error::Returns<Self> {
        let path = path.as_ref();
        let file = match std::fs::File::open(path) {
            Ok(file) => file,
            Err(err) => {
                return_error!(format!("cannot open {}: {}", path.display(), err));
            }
        };
        let dictionary = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::info!(path = %path.display(), words = dictionary.len(), "dictionary loaded");
        Ok(dictionary)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordValidator for Dictionary {
    fn is_valid(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_first_tab_field() {
        let data = "cat\ta small feline\nDOG\tcanine\textra\n\n  toe  \nq\"uote\n";
        let dictionary = Dictionary::from_reader(data.as_bytes()).unwrap();
        assert_eq!(dictionary.len(), 4);
        assert!(dictionary.is_valid("CAT"));
        assert!(dictionary.is_valid("dog"));
        assert!(dictionary.is_valid("Toe"));
        assert!(dictionary.is_valid("Q\"UOTE"));
        assert!(!dictionary.is_valid("feline"));
    }

    #[test]
    fn from_words_is_case_insensitive() {
        let dictionary = Dictionary::from_words(["Boot", "run", " lice "]);
        assert!(dictionary.is_valid("BOOT"));
        assert!(dictionary.is_valid("Run"));
        assert!(dictionary.is_valid("lice"));
        assert!(!dictionary.is_valid("boo"));
        assert!(Dictionary::default().is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Dictionary::from_file("/nonexistent/words.txt").is_err());
    }
}
