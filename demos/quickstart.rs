use chrono::Utc;
use sunriseset::{JulianDate, ModifiedJulianDate, SolarPosition};

fn main() {
    let now_jd = JulianDate::from_utc(Utc::now());
    let now_mjd: ModifiedJulianDate = now_jd.to();
    let t = now_jd.julian_centuries();
    let sun = SolarPosition::at(t);

    println!("JD(UTC): {now_jd}");
    println!("MJD(UTC): {now_mjd}");
    println!("T: {t}");
    println!("Declination: {:.4}°", sun.declination);
    println!("Right ascension: {:.4}°", sun.right_ascension);
    println!("Equation of time: {:.2} min", sun.equation_of_time);
    println!("Sun distance: {:.6} AU", sun.radius_vector);
}
