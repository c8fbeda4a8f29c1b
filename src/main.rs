use log::info;
use real_poly::{PolyError, Polynomial};

fn main() -> Result<(), PolyError> {
    env_logger::init();
    let p = Polynomial::from_coeffs(vec![1.0, 3.0, 2.0, 6.0])?;
    let q = Polynomial::from_coeffs(vec![0.0, 1.0, -2.0, -3.0])?;
    info!("p has degree {}, q has degree {}", p.degree(), q.degree());

    println!("p        = {p}");
    println!("q        = {q}");
    println!("p + q    = {}", &p + &q);
    println!("p - q    = {}", &p - &q);
    println!("p * q    = {}", &p * &q);
    println!("p(q(x))  = {}", p.compose(&q));
    println!("p'       = {}", p.derive());
    println!("p(2)     = {}", p.evaluate(2.0));
    Ok(())
}
