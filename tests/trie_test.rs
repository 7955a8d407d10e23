//! Integration tests for the character and token tries

use fornax::prelude::*;

#[test]
fn test_round_trip() -> Result<()> {
    let words = ["cat", "cats", "car", "dog", "日本"];
    let mut trie = WordTrie::new();

    for word in words {
        assert!(trie.insert(word)?);
        assert!(trie.search(word)?);
    }
    assert!(!trie.search("ca")?);

    for word in words {
        assert!(trie.delete(word)?);
        assert!(!trie.search(word)?);
    }
    assert!(trie.is_empty());
    assert_eq!(trie, WordTrie::new());
    Ok(())
}

#[test]
fn test_missing_delete_leaves_trie_unchanged() -> Result<()> {
    let mut trie = WordTrie::from_words(["cat", "cats"])?;
    let before = trie.clone();

    assert!(!trie.delete("ca")?);
    assert!(!trie.delete("dog")?);
    assert_eq!(trie, before);
    Ok(())
}

#[test]
fn test_token_trie_normalizes_tokens() -> Result<()> {
    let mut trie = TokenTrie::new();
    trie.insert(&["New", "York"])?;

    assert!(trie.search(&[" new ", "YORK"])?);
    assert!(!trie.search(&["new"])?);
    assert!(trie.starts_with(&["new"]));
    Ok(())
}

#[test]
fn test_generic_trie_over_integers() -> Result<()> {
    let mut trie: Trie<u32> = Trie::new();
    trie.insert([1, 2, 3])?;
    trie.insert([1, 2])?;

    assert_eq!(trie.len(), 2);
    assert!(trie.delete(&[1, 2, 3])?);
    assert!(trie.search(&[1, 2])?);
    assert!(matches!(trie.search(&[]), Err(FornaxError::EmptyInput(_))));
    Ok(())
}
