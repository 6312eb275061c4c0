//! Read HTML from stdin, print extracted ingredient lines to stdout.
//!
//! Usage:
//!   extract_stdin [lexicon-dir] < page.html
//!
//! When a lexicon directory is given it is loaded before extraction;
//! accepted line shapes, mined collocations and harvested food words are
//! written back afterwards.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use ladle::{
    accept_lines, extract_bytes_with_options, Learner, Lexicon, Options, RuleTagger,
};

fn main() -> ExitCode {
    let lexicon_dir: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);

    let mut html = Vec::new();
    if let Err(err) = std::io::stdin().read_to_end(&mut html) {
        eprintln!("error: failed to read stdin: {err}");
        return ExitCode::FAILURE;
    }

    let mut lexicon = match &lexicon_dir {
        Some(dir) => match Lexicon::load_dir(dir) {
            Ok(lexicon) => lexicon,
            Err(err) => {
                eprintln!("error: failed to load lexicon: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Lexicon::new(),
    };

    let tagger = RuleTagger::new();
    let options = Options::default();
    let result = match extract_bytes_with_options(&html, &lexicon, &tagger, &options) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    for line in &result.lines {
        println!("{line}");
    }

    if let Some(dir) = &lexicon_dir {
        accept_lines(&mut lexicon, &tagger, &result.lines, &options);
        let harvest = Learner::new(options.top_collocations).mine(&result.lines, &tagger);
        harvest.merge_into(&mut lexicon);
        if let Err(err) = lexicon.save_dir(dir) {
            eprintln!("error: failed to save lexicon: {err}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
