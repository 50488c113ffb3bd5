mod cli;
mod init;
mod schema;

pub fn run(args: Vec<String>) -> anyhow::Result<()> {
    let cmd = cli::parse_args(&args)?;
    match cmd {
        cli::Command::Help(topic) => {
            cli::print_help(topic);
            Ok(())
        }
        cli::Command::Init(args) => init::run(args),
        cli::Command::Check(args) => schema::check(args),
        cli::Command::Ddl(args) => schema::ddl(args),
        cli::Command::Drop(args) => schema::drop(args),
    }
}
