//! Schema JSON para estructurar la salida del modelo
//!
//! Este módulo contiene el schema estático que describe una
//! `VehicleSpecification`: nombres de campo, tipos, descripciones, unidades y
//! vocabularios cerrados. Es configuración estática del proceso: se construye
//! una vez y se reutiliza en todas las peticiones, tanto como restricción de
//! salida estructurada (backend Anthropic) como embebido en texto dentro del
//! prompt (backend OpenAI).

use lazy_static::lazy_static;
use serde_json::{json, Value};

lazy_static! {
    /// Schema JSON de `vehicle_specifications`
    pub static ref VEHICLE_JSON_SCHEMA: Value = json!({
        "title": "vehicle_specifications",
        "description": "Technical specifications of a vehicle.",
        "type": "object",
        "properties": {
            "brand": {
                "type": "string",
                "description": "The brand of the vehicle."
            },
            "model": {
                "type": "string",
                "description": "The model of the vehicle."
            },
            "version": {
                "type": "string",
                "description": "The version or complete version of the vehicle (if applicable).",
                "default": null
            },
            "year": {
                "type": "integer",
                "description": "The year of manufacturing of the vehicle."
            },
            "body_type": {
                "type": "string",
                "description": "The type of the vehicle's body.",
                "enum": [
                    "Turismo familiar",
                    "Turismo",
                    "Todoterreno",
                    "Vehículo comercial",
                    "Descapotable",
                    "Pick Up",
                    "Monovolumen",
                    "Coupé",
                    "Monovolumen_parecido_a_vehículo_comercial"
                ]
            },
            "doors": {
                "type": "integer",
                "description": "The number of doors the vehicle has.",
                "default": null
            },
            "status": {
                "type": "string",
                "description": "The status of the vehicle (e.g., for sale, discontinued).",
                "default": null
            },
            "length": {
                "type": "integer",
                "description": "The length of the vehicle in millimeters (mm).",
                "default": null
            },
            "seats": {
                "type": "integer",
                "description": "The number of seats in the vehicle.",
                "default": null
            },
            "price": {
                "type": "number",
                "description": "The price of the vehicle in euros (€).",
                "default": null
            },
            "technology": {
                "type": "string",
                "description": "The technology of the vehicle.",
                "enum": [
                    "HEV",
                    "MHEV",
                    "PHEV",
                    "EV",
                    "EREV",
                    "Combustion"
                ]
            },
            "transmission": {
                "type": "string",
                "description": "The type of transmission (e.g., manual, automatic).",
                "default": null
            },
            "fuel_consumption": {
                "type": "number",
                "description": "The combined fuel consumption in liters per 100 kilometers (l/100km).",
                "default": null
            },
            "fuel_type": {
                "type": "string",
                "description": "The type of fuel the vehicle uses.",
                "enum": [
                    "gasoleo",
                    "gasolina",
                    "electricidad",
                    "etanol",
                    "gas natural",
                    "glp",
                    "hidrogeno"
                ]
            },
            "electric_range": {
                "type": "integer",
                "description": "The electric range of the vehicle in kilometers (km), if applicable.",
                "default": null
            },
            "battery_capacity": {
                "type": "number",
                "description": "The gross or net capacity of the battery in kilowatt-hours (kWh), if applicable.",
                "default": null
            },
            "electric_consumption": {
                "type": "number",
                "description": "The combined electric consumption in kilowatt-hours per 100 kilometers (kWh/100km), if applicable.",
                "default": null
            },
            "charging_time": {
                "type": "number",
                "description": "The charging time in alternating current (AC) in hours (h), if applicable.",
                "default": null
            },
            "duplicate_date": {
                "type": "string",
                "description": "A date to distinguish between duplicates in the format MMM-YY (e.g., Sep-24)."
            },
            "max_power": {
                "type": "object",
                "properties": {
                    "cv": {
                        "type": "integer",
                        "description": "Horsepower of the vehicle.",
                        "default": null
                    },
                    "kw": {
                        "type": "integer",
                        "description": "Kilowatts of the vehicle.",
                        "default": null
                    }
                },
                "default": null
            },
            "acceleration": {
                "type": "number",
                "description": "The time it takes to accelerate from 0 to 100 km/h in seconds.",
                "default": null
            },
            "displacement": {
                "type": "integer",
                "description": "The engine displacement in cubic centimeters (cc).",
                "default": null
            },
            "environmental_label": {
                "type": "string",
                "description": "The vehicle's environmental label (e.g., Euro 6).",
                "default": null
            },
            "co2_emissions": {
                "type": "number",
                "description": "The CO2 emissions in grams per kilometer (gCO2/km).",
                "default": null
            },
            "tank_capacity": {
                "type": "number",
                "description": "The fuel tank capacity in liters (l) or kilograms (kg), depending on fuel type.",
                "default": null
            },
            "max_speed": {
                "type": "number",
                "description": "The maximum speed of the vehicle in kilometers per hour (km/h).",
                "default": null
            },
            "maintenance_costs": {
                "type": "number",
                "description": "The monthly maintenance costs in euros per month (€/month).",
                "default": null
            },
            "euro_ncap_rating": {
                "type": "integer",
                "description": "The EuroNCAP rating in stars.",
                "default": null
            },
            "sources": {
                "type": "string",
                "description": "List of web pages from which data were extracted",
                "default": null
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_schema_describe_todos_los_campos_de_la_ficha() {
        let properties = VEHICLE_JSON_SCHEMA["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 29);

        for field in [
            "brand",
            "model",
            "year",
            "body_type",
            "technology",
            "fuel_type",
            "duplicate_date",
            "max_power",
            "euro_ncap_rating",
            "sources",
        ] {
            assert!(properties.contains_key(field), "falta el campo {field}");
        }
    }

    #[test]
    fn los_vocabularios_cerrados_coinciden_con_los_enums_del_modelo() {
        let technology = VEHICLE_JSON_SCHEMA["properties"]["technology"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(technology.len(), 6);

        let fuel_type = VEHICLE_JSON_SCHEMA["properties"]["fuel_type"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(fuel_type.len(), 7);

        // Cada valor del schema debe deserializar al enum tipado
        for value in technology {
            let parsed: Result<crate::models::vehicle::Technology, _> =
                serde_json::from_value(value.clone());
            assert!(parsed.is_ok(), "valor de technology no tipado: {value}");
        }
        for value in fuel_type {
            let parsed: Result<crate::models::vehicle::FuelType, _> =
                serde_json::from_value(value.clone());
            assert!(parsed.is_ok(), "valor de fuel_type no tipado: {value}");
        }
    }

    #[test]
    fn max_power_es_el_unico_sub_objeto() {
        let properties = VEHICLE_JSON_SCHEMA["properties"].as_object().unwrap();
        let nested: Vec<&String> = properties
            .iter()
            .filter(|(_, schema)| schema["type"] == "object")
            .map(|(name, _)| name)
            .collect();
        assert_eq!(nested, vec!["max_power"]);
    }
}
