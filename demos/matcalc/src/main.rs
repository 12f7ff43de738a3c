use argh::FromArgs;
use scanmat::{
    linalg::{LinalgExt, NormKind},
    matrix::Matrix,
};

#[derive(Debug, Clone, Copy)]
enum Op {
    Show,
    Transpose,
    Det,
    Inv,
    Adjugate,
    Pinv,
    Lu,
    Qr,
    Norm(NormKind),
    Trace,
    Sum,
    Add,
    Sub,
    Mul,
    Solve,
}

impl std::str::FromStr for Op {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "show" => Self::Show,
            "t" | "transpose" => Self::Transpose,
            "det" => Self::Det,
            "inv" => Self::Inv,
            "adj" => Self::Adjugate,
            "pinv" => Self::Pinv,
            "lu" => Self::Lu,
            "qr" => Self::Qr,
            "trace" => Self::Trace,
            "sum" => Self::Sum,
            "add" => Self::Add,
            "sub" => Self::Sub,
            "mul" => Self::Mul,
            "solve" => Self::Solve,
            other => match other.strip_prefix("norm-") {
                Some(kind) => Self::Norm(kind.parse().map_err(|e| format!("{e}"))?),
                None => return Err(format!("unknown operation {other:?}")),
            },
        })
    }
}

#[derive(FromArgs)]
/// Evaluate a matrix expression and print the result
struct Args {
    /// the matrix literal, e.g. "1 2; 3 4", or @path to read it from a file
    #[argh(option, short = 'm')]
    matrix: String,

    /// the right-hand operand for add, sub, mul and solve
    #[argh(option, short = 'r')]
    rhs: Option<String>,

    /// the operation: show, t, det, inv, adj, pinv, lu, qr, norm-{inf,1,2,fro},
    /// trace, sum, add, sub, mul, solve
    #[argh(option, short = 'o', default = "Op::Show")]
    op: Op,

    /// separator printed between rows
    #[argh(option, default = "String::from(\"\\n\")")]
    row_separator: String,
}

fn load(literal: &str) -> Result<Matrix<f64>, Box<dyn std::error::Error>> {
    let text = match literal.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)?,
        None => literal.to_string(),
    };
    Ok(Matrix::parse(&text)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let a = load(&args.matrix)?;
    log::info!("loaded matrix of {}", a.shape());
    let rhs = || -> Result<Matrix<f64>, Box<dyn std::error::Error>> {
        let literal = args
            .rhs
            .as_deref()
            .ok_or("this operation needs --rhs")?;
        load(literal)
    };
    let sep = args.row_separator.as_str();

    match args.op {
        Op::Show => println!("{}", a.to_text(sep)),
        Op::Transpose => println!("{}", a.t()?.to_text(sep)),
        Op::Det => println!("{}", a.det()?),
        Op::Inv => println!("{}", a.inv()?.to_text(sep)),
        Op::Adjugate => println!("{}", a.adjugate()?.to_text(sep)),
        Op::Pinv => println!("{}", a.pinv()?.to_text(sep)),
        Op::Lu => {
            let f = a.lu()?;
            println!("{}", f.permutation_matrix()?.with_name("P").to_text(sep));
            println!("{}", f.l.to_text(sep));
            println!("{}", f.u.to_text(sep));
        }
        Op::Qr => {
            let f = a.qr()?;
            println!("{}", f.q.to_text(sep));
            println!("{}", f.r.to_text(sep));
        }
        Op::Norm(kind) => println!("{}", a.norm(kind)?),
        Op::Trace => println!("{}", a.trace()?),
        Op::Sum => println!("{}", a.sum()?),
        Op::Add => println!("{}", a.try_add(&rhs()?)?.to_text(sep)),
        Op::Sub => println!("{}", a.try_sub(&rhs()?)?.to_text(sep)),
        Op::Mul => println!("{}", a.matmul(&rhs()?)?.to_text(sep)),
        Op::Solve => println!("{}", a.solve(&rhs()?)?.to_text(sep)),
    }

    Ok(())
}
