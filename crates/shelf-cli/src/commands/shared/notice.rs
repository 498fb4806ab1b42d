use shelf_core::notice::Notice;

use crate::cli::GlobalFlags;

/// Print a notice to stderr unless `--quiet`. Stdout stays machine-readable.
pub fn emit(notice: &Notice, flags: &GlobalFlags) {
    if flags.quiet {
        return;
    }
    if notice.is_destructive() {
        eprintln!("✗ {notice}");
    } else {
        eprintln!("✓ {notice}");
    }
}
