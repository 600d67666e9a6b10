use autodiff_core::{AutodiffError, Var};

fn main() -> Result<(), AutodiffError> {
    let x1 = Var::named(2.0, "x1");
    let x2 = Var::named(3.0, "x2");

    // y = x1 * x2 + sin(x1) / x2
    let y = &(&x1 * &x2) + &(x1.sin() / &x2)?;
    println!("y = {}", y);

    y.backward()?;
    println!("dy/dx1 = {:.6}", x1.grad());
    println!("dy/dx2 = {:.6}", x2.grad());

    match Var::new(1.0) / 0.0 {
        Ok(v) => println!("unexpected: {}", v),
        Err(e) => println!("error: {}", e),
    }

    Ok(())
}
