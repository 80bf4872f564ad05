use std::sync::{Arc, LazyLock};

use dashmap::DashMap;

use crate::config::{ConfigResult, LocalFileConfigError};

static FILE_CACHE: LazyLock<DashMap<String, Arc<String>>> = LazyLock::new(DashMap::new);

/// Returns the contents of `file_path`, reading it from disk on the first
/// call and from the cache afterwards.
pub fn get_config_file(file_path: &str) -> ConfigResult<Arc<String>> {
    if let Some(contents) = FILE_CACHE.get(file_path) {
        return Ok(contents.clone());
    }

    let contents = match std::fs::read_to_string(file_path) {
        Ok(contents) => Arc::new(contents),
        Err(_) => return Err(Box::new(LocalFileConfigError::missing(file_path))),
    };

    FILE_CACHE.insert(file_path.to_string(), contents.clone());
    Ok(contents)
}

/// Reads `file_path` unconditionally and replaces whatever the cache holds
/// for it. Lets a long-lived process pick up edited config files.
pub fn init_or_replace_config(file_path: &str) -> ConfigResult<Arc<String>> {
    match std::fs::read_to_string(file_path) {
        Ok(contents) => {
            let contents = Arc::new(contents);
            FILE_CACHE.insert(file_path.to_string(), contents.clone());
            Ok(contents)
        }
        Err(_) => Err(Box::new(LocalFileConfigError::missing(file_path))),
    }
}

pub fn clear_cache() {
    FILE_CACHE.clear();
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use crate::config_cache::{clear_cache, get_config_file, init_or_replace_config};

    #[test]
    fn test_cache() {
        let file_arc1 = get_config_file("./test/test.file").unwrap();
        let file_arc2 = get_config_file("./test/test.file").unwrap();
        assert!(Arc::ptr_eq(&file_arc1, &file_arc2));

        clear_cache();
        let file_arc3 = get_config_file("./test/test.file").unwrap();
        assert!(!Arc::ptr_eq(&file_arc1, &file_arc3));
    }

    #[test]
    fn test_replace() {
        // Own fixture; test_cache clears the shared map mid-test.
        let file_arc1 = get_config_file("./test/replace.file").unwrap();
        let file_arc2 = init_or_replace_config("./test/replace.file").unwrap();
        assert!(!Arc::ptr_eq(&file_arc1, &file_arc2));
        assert_eq!(*file_arc1, *file_arc2);
    }

    #[test]
    fn test_missing_file() {
        assert!(get_config_file("./test/no_such.file").is_err());
    }
}
