use vtree_util::errors::VtreeError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = VtreeError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_manifest_error_display() {
    let err = VtreeError::Manifest {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Manifest error: bad syntax");
}

#[test]
fn test_lockfile_error_display() {
    let err = VtreeError::Lockfile {
        message: "unexpected key".to_string(),
    };
    assert_eq!(err.to_string(), "Lockfile error: unexpected key");
}

#[test]
fn test_invalid_argument_display() {
    let err = VtreeError::InvalidArgument {
        message: "unknown format 'xml'".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid argument: unknown format 'xml'");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: VtreeError = io_err.into();
    assert!(matches!(err, VtreeError::Io(_)));
}
