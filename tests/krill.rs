#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	#[test]
	fn test_krill_file() {
		let krill = krill::Krill;
		let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("test.kr");
		let result = krill.run_file(&path);
		assert!(result.is_ok());
	}

	#[test]
	fn test_missing_file_is_an_error() {
		let krill = krill::Krill;
		let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("no_such_file.kr");
		let result = krill.run_file(&path);
		assert!(matches!(result, Err(krill::KrillError::InternalError(_))));
	}
}
