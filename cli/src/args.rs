use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "bn")]
#[command(about = "bignum test harness", long_about = None)]
pub struct Cli {
    /// Suite to run: 0=div 1=rsa 2=load_cmp 3=hand_picked 4=golden 5=factorial 6=randomized
    pub selector: Option<String>,
    /// Arguments for the selected suite (randomized: <oper> <a> <b> <expected>)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
