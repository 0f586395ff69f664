use std::env;
use std::error::Error;

use quadrature::configuration::Configuration;

const DEFAULT_CONFIG_PATH: &'static str = "json/config.json";

fn main() -> Result<(), Box<dyn Error>> {
    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());
    let config = Configuration::from_reader(config_path)?;

    for report in config.run()? {
        println!("# {} ({}), exact = {}", report.name(), report.method(), report.exact());
        println!("{}, estimate, absolute_error", report.method().resolution_name());
        for point in report.points() {
            println!("{}, {:.15}, {:.3e}", point.resolution(), point.estimate(), point.absolute_error());
        }
        match report.observed_order() {
            Some(order) => println!("observed order: {:.3}", order),
            None => println!("observed order: n/a")
        }
        println!();
    }
    Ok(())
}
