//! Bundle command implementation

use crate::bundler::{BundleOutcome, BundleRequest, Bundler};
use crate::cli::BundleArgs;
use crate::error::Result;
use crate::progress::BundleProgress;

impl From<BundleArgs> for BundleRequest {
    fn from(args: BundleArgs) -> Self {
        BundleRequest {
            source: args.source,
            output: args.output,
            languages: args.language,
            sort: args.sort,
            remove_empty_lines: args.remove_empty_lines,
            note: args.note,
            author: args.author,
        }
    }
}

/// Run bundle command
pub fn run(args: BundleArgs, verbose: bool) -> Result<BundleOutcome> {
    let request = BundleRequest::from(args);
    let mut progress = BundleProgress::new(verbose);
    Bundler::default().run(&request, &mut progress)
}
