mod cli;


use std::fs;
use std::io;

use mirrorgen_engine::Generator;

use cli::Params;

fn main() {
    let matches = cli::build_cli().get_matches();
    let params = Params::from_matches(&matches);

    let generator = match Generator::new(&params.pkg, params.scan) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = generator.scan() {
        eprintln!("error: failed to scan package: {e}");
        std::process::exit(1);
    }

    let result = match &params.output {
        Some(path) => match fs::File::create(path) {
            Ok(mut file) => generator.render(&params.mode, &mut file),
            Err(e) => {
                eprintln!("error: failed to create {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            generator.render(&params.mode, &mut lock)
        }
    };

    if let Err(e) = result {
        eprintln!("error: failed to render package: {e}");
        std::process::exit(1);
    }
}
