use serde_json::json;

/// Returns the JSON schema the text model must follow when generating recipes
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "recipeName": {
                    "type": "string",
                    "description": "The creative and appealing name of the recipe."
                },
                "description": {
                    "type": "string",
                    "description": "A short, one-sentence, enticing description of the dish."
                },
                "ingredients": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": {
                                "type": "string",
                                "description": "The name of the ingredient (e.g., 'all-purpose flour', 'chicken breast')."
                            },
                            "quantity": {
                                "type": "string",
                                "description": "The measurement for the ingredient (e.g., '1 cup', '2 tbsp', '500g')."
                            }
                        },
                        "required": ["name", "quantity"]
                    },
                    "description": "A list of all ingredients required for the recipe, including their name and quantity."
                },
                "instructions": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Detailed, step-by-step instructions to prepare the dish, including cooking times, temperatures, and specific techniques where applicable."
                }
            },
            "required": ["recipeName", "description", "ingredients", "instructions"]
        }
    })
}
