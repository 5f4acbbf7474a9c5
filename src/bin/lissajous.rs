use lissajous::{exit_codes, logging, write_file, OUTPUT_FILE};
use structopt::StructOpt;
use tracing::info;

#[derive(StructOpt, Debug)]
#[structopt(name = "lissajous")]
/// Write 20 points of the curve x = 0.8 sin(t), y = 0.8 sin(2t)
/// to lissajous_data.txt in the current directory
struct Config {}

fn main() {
    logging::init();
    let _conf: Config = Config::from_args();
    let start = std::time::Instant::now();

    match write_file(OUTPUT_FILE) {
        Ok(lines) => {
            info!(lines, elapsed = start.elapsed().as_secs_f64(), "done");
            std::process::exit(exit_codes::OK);
        }
        Err(e) => {
            eprintln!("lissajous: {}", e);
            std::process::exit(exit_codes::IO_FAILURE);
        }
    }
}
