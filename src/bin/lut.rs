use clap::{App, Arg};
use log::{error, info};
use std::io::{BufWriter, Write};
fn main() -> std::io::Result<()> {
    let matches = App::new("lut")
        .version("0.1")
        .author("Bansho Masutani")
        .about("Print a precomputed lookup table as comma separated integers.")
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Debug mode"),
        )
        .arg(
            Arg::with_name("list")
                .long("list")
                .short("l")
                .help("List available tables and exit."),
        )
        .arg(
            Arg::with_name("newline")
                .long("newline")
                .short("n")
                .help("Append a newline after the table."),
        )
        .arg(
            Arg::with_name("table")
                .value_name("TABLE")
                .index(1)
                .help("Table name, case insensitive. [default: pwm_1024]"),
        )
        .get_matches();
    let level = match matches.occurrences_of("verbose") {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    let registry = lut_gen::Registry::builtin();
    let stdout = std::io::stdout();
    let mut wtr = BufWriter::new(stdout.lock());
    if matches.is_present("list") {
        for t in registry.iter() {
            writeln!(wtr, "{}\t{}..={}\t{}", t.name, t.min, t.max, t.description)?;
        }
        return wtr.flush();
    }
    let table = match registry.resolve(matches.value_of("table")) {
        Ok(res) => res,
        Err(why) => {
            error!("{}", why);
            eprintln!("{}", why);
            eprintln!("Available tables: {}", registry.names().join(", "));
            std::process::exit(1);
        }
    };
    info!("Table {} ({} values)", table.name, table.len());
    lut_gen::write_table(table, &mut wtr)?;
    if matches.is_present("newline") {
        writeln!(wtr)?;
    }
    wtr.flush()
}
