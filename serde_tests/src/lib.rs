#[cfg(test)]
mod tests {

    use std::error::Error;

    use ron;
    use rs_dabble::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Words {
        words: Vec<String>,
    }

    #[test]
    fn word_dictionary_serde() {
        let dictionary = WordDictionary::from_iterator(vec!["ad", "bet", "cook", "abcdefghijk"]);

        let ser = ron::to_string(&dictionary);
        assert!(ser.is_ok());

        let deser = ron::from_str::<WordDictionary>(&ser.unwrap());
        assert!(deser.is_ok());
        let deser = deser.unwrap();
        assert_eq!(deser, dictionary);
        assert!(deser.contains("Cook"));
        assert_eq!(deser.words_of_length(12), dictionary.words_of_length(10));
    }

    #[test]
    fn word_dictionary_deserialize_normalizes() -> Result<(), Box<dyn Error>> {
        let deser = ron::from_str::<WordDictionary>(r#"["Cook", "bet", "COOK", " ad "]"#)?;

        assert_eq!(deser.len(), 3);
        assert_eq!(deser, WordDictionary::from_iterator(["ad", "bet", "cook"]));
        Ok(())
    }

    #[test]
    fn bundled_dictionary_serde() -> Result<(), Box<dyn Error>> {
        let dictionary = WordDictionary::from_path("../data/dictionary.txt")?;

        let ser = ron::to_string(&dictionary)?;
        let deser = ron::from_str::<WordDictionary>(&ser)?;

        assert_eq!(deser.len(), dictionary.len());
        assert_eq!(deser, dictionary);
        Ok(())
    }

    #[test]
    fn puzzle_words_serialize() -> Result<(), Box<dyn Error>> {
        let dictionary = WordDictionary::from_iterator(["ad", "bet", "cook", "dumps", "eclair"]);
        let puzzle = Puzzle::demo(&dictionary);

        let scrambled = ron::to_string(&puzzle.scrambled_words())?;
        let solution = ron::to_string(&puzzle.solution_words())?;

        assert_eq!(
            ron::from_str::<Words>(&scrambled)?.words,
            vec!["ri", "alc", "espm", "udkoo", "ctebad"]
        );
        assert_eq!(
            ron::from_str::<Words>(&solution)?.words,
            vec!["ad", "bet", "cook", "dumps", "eclair"]
        );
        Ok(())
    }
}
