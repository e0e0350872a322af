use approx::assert_abs_diff_eq;
use chrono::{NaiveDate, TimeZone, Timelike, Utc};
use sunriseset::{
    ephemeris, sunrise_hour_angle, EventOutcome, EventSolver, FallbackPolicy, Horizon,
    JulianDate, Location, NoCrossing, ReportOptions, SolarError, SolarEvent, TwilightReport,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn equinox_fixture_at_null_island() {
    let null_island = Location::new(0.0, 0.0).unwrap();
    let report = TwilightReport::new(date(2020, 3, 20), null_island).unwrap();

    let sunrise = report.sunrise().to_utc().unwrap();
    let sunset = report.sunset().to_utc().unwrap();
    assert_eq!((sunrise.hour(), sunrise.minute()), (6, 4));
    assert_eq!((sunset.hour(), sunset.minute()), (18, 10));

    let noon = report.solar_noon().to_utc().unwrap();
    assert_eq!((noon.hour(), noon.minute()), (12, 7));
}

#[test]
fn equinox_hour_angles_are_symmetric() {
    let t = JulianDate::from_date(date(2020, 3, 20)).julian_centuries();
    let dec = ephemeris::declination(t);
    let rise = sunrise_hour_angle(dec, 0.0, Horizon::Official).unwrap();
    let set = sunriseset::sunset_hour_angle(dec, 0.0, Horizon::Official).unwrap();
    assert_eq!(rise, -set);
    assert_abs_diff_eq!(rise.to_degrees(), 90.833, epsilon = 0.01);
}

#[test]
fn arctic_summer_falls_back_to_the_previous_sunrise() {
    let svalbard = Location::new(78.0, 15.0).unwrap();
    let requested = date(2021, 6, 25);

    let solver = EventSolver::new(svalbard);
    assert_eq!(
        solver.solve(JulianDate::from_date(requested), SolarEvent::SUNRISE),
        EventOutcome::NotFound(NoCrossing::AlwaysAbove)
    );

    let report = TwilightReport::new(requested, svalbard).unwrap();
    let sunrise = report.sunrise();
    assert!(sunrise < JulianDate::from_date(requested));

    let dec = ephemeris::declination(sunrise.julian_centuries());
    assert!(sunrise_hour_angle(dec, 78.0, Horizon::Official).is_ok());
}

#[test]
fn invalid_latitude_is_rejected_up_front() {
    assert_eq!(
        Location::new(91.0, 0.0),
        Err(SolarError::LatitudeOutOfRange(91.0))
    );
    assert!(Location::new(f64::NAN, 0.0).is_err());
}

#[test]
fn centuries_roundtrip_for_arbitrary_days() {
    let mut jd = 2_000_000.123;
    while jd < 2_800_000.0 {
        let time = JulianDate::new(jd);
        let back = JulianDate::from_julian_centuries(time.julian_centuries());
        assert_abs_diff_eq!(back.value(), jd, epsilon = 1e-6);
        jd += 7_919.37;
    }
}

#[test]
fn new_york_winter_matches_almanac() {
    let nyc = Location::new(40.7128, -74.006).unwrap();
    let report = TwilightReport::new(date(2024, 1, 15), nyc).unwrap();

    let sunrise = report.sunrise().to_utc().unwrap();
    let sunset = report.sunset().to_utc().unwrap();
    // 07:18 and 16:52 EST
    assert_eq!((sunrise.hour(), sunrise.minute()), (12, 18));
    assert_eq!((sunset.hour(), sunset.minute()), (21, 52));
}

#[test]
fn antarctic_winter_and_every_band_policy() {
    let station = Location::new(-78.0, 0.0).unwrap();
    let requested = date(2021, 6, 21);
    let options = ReportOptions::default().with_fallback(FallbackPolicy::AllEvents);
    let report = TwilightReport::with_options(requested, station, options).unwrap();

    let midnight = JulianDate::from_date(requested);
    assert!(report.sunrise() > midnight, "next sunrise lies ahead");
    assert!(report.sunset() < midnight, "last sunset lies behind");
    assert!(report.civil_dawn().is_some());
    assert!(report.nautical_dawn().is_some());
    assert!(report.astronomical_dawn().is_some());
}

#[test]
fn search_limit_is_honoured() {
    let svalbard = Location::new(78.0, 15.0).unwrap();
    let options = ReportOptions::default().with_search_limit(30);
    let err = TwilightReport::with_options(date(2021, 6, 25), svalbard, options)
        .unwrap_err();
    assert_eq!(
        err,
        SolarError::PolarSearchExhausted {
            event: SolarEvent::SUNRISE,
            days: 30
        }
    );
}

#[test]
fn midnight_sun_just_inside_the_polar_circle() {
    for latitude in [65.8, 66.0, 66.3, -66.0, -66.3] {
        let site = Location::new(latitude, 0.0).unwrap();
        let solstice = if latitude > 0.0 {
            date(2021, 6, 21)
        } else {
            date(2021, 12, 21)
        };
        let report = TwilightReport::new(solstice, site).unwrap();
        let midnight = JulianDate::from_date(solstice);
        assert!(report.sunrise() < midnight, "{latitude}°");
        assert!(report.sunset() > midnight + qtty::Days::new(1.0), "{latitude}°");
    }
}

#[test]
fn poles_always_get_a_report() {
    for latitude in [89.99, 90.0, -90.0] {
        let site = Location::new(latitude, 0.0).unwrap();
        for day in [date(2021, 3, 20), date(2021, 6, 21), date(2021, 12, 21)] {
            assert!(TwilightReport::new(day, site).is_ok(), "{latitude}° on {day}");
        }
    }
}

#[test]
fn report_for_a_utc_instant() {
    let afternoon = Utc.with_ymd_and_hms(2020, 3, 20, 15, 30, 0).unwrap();
    let site = Location::new(0.0, 0.0).unwrap();
    let a = TwilightReport::for_instant(JulianDate::from_utc(afternoon), site).unwrap();
    let b = TwilightReport::new(date(2020, 3, 20), site).unwrap();
    assert_eq!(a, b);
}

#[cfg(feature = "serde")]
#[test]
fn serde_report_roundtrip_keeps_instants() {
    let london = Location::new(51.5074, -0.1278).unwrap();
    let report = TwilightReport::new(date(2021, 6, 21), london).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"sunrise\""));
    assert!(json.contains("\"astronomical_dawn\":null"));
    let back: TwilightReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[cfg(feature = "serde")]
#[test]
fn serde_rejects_invalid_locations() {
    let err = serde_json::from_str::<Location>(r#"{"latitude":91.0,"longitude":0.0}"#);
    assert!(err.is_err());
}
