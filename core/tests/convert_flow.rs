use flow2oas_core::{convert, FlowDocument};
use pretty_assertions::assert_eq;

#[test]
fn test_flow_to_yaml() {
    let flow_json = r#"{
        "name": "Pets",
        "short_descr": "Pet API",
        "types": {
            "pet": {
                "name": "Pet",
                "fields": [
                    {"name": "id", "type": "int", "description": "identifier"},
                    {"name": "tag", "type": "string", "description": "optional tag"}
                ]
            }
        },
        "endpoints": {
            "e1": {
                "url": "/pets",
                "method": "GET",
                "id": "listPets",
                "short_descr": "List",
                "description": "List pets",
                "parameters": [
                    {"name": "limit", "type": "int", "description": "max results"}
                ]
            }
        }
    }"#;

    let expected_oas_spec = r#"
openapi: 3.0.0
info:
  title: Pets
  description: Pet API
  version: ''
paths:
  /pets:
    get:
      summary: List
      description: List pets
      operationId: listPets
      tags:
      - pets
      requestBody:
        content:
          application/json:
            schema:
              $ref: '#/components/schemas/get_pets'
      responses:
        '200':
          description: Successful operation
          content:
            application/json:
              schema:
                $ref: '#/components/schemas/get_pets_response'
components:
  schemas:
    Pet:
      type: object
      properties:
        id:
          type: integer
          description: identifier
        tag:
          type: string
          description: optional tag
    get_pets:
      type: object
      properties:
        limit:
          type: integer
          description: max results
    get_pets_response:
      type: object
      properties:
        limit:
          type: integer
          description: max results
tags:
- name: pets
  description: Pet API
    "#;

    let flow = FlowDocument::from_json(flow_json).unwrap();
    let generated = convert(&flow).to_yaml().unwrap();

    assert_eq!(generated.trim(), expected_oas_spec.trim());
}

#[test]
fn test_flow_structural_output() {
    let flow_json = r#"{
        "name": "Pets",
        "short_descr": "Pet API",
        "types": {},
        "endpoints": {
            "e1": {
                "url": "/pets",
                "method": "GET",
                "id": "listPets",
                "short_descr": "List",
                "description": "List pets",
                "parameters": [
                    {"name": "limit", "type": "int", "description": "max results"}
                ]
            }
        }
    }"#;

    let flow = FlowDocument::from_json(flow_json).unwrap();
    let oas = serde_json::to_value(convert(&flow)).unwrap();

    assert_eq!(
        oas.pointer("/paths/~1pets/get/operationId").unwrap(),
        "listPets"
    );
    assert_eq!(
        oas.pointer("/components/schemas/get_pets/properties/limit/type")
            .unwrap(),
        "integer"
    );
    assert_eq!(
        oas["tags"],
        serde_json::json!([{"name": "pets", "description": "Pet API"}])
    );
}

#[test]
fn test_output_round_trips_through_yaml() {
    let flow_json = r#"{
        "name": "Shop",
        "short_descr": "Shop API",
        "types": {},
        "endpoints": {
            "get": {
                "url": "/orders/{id}",
                "method": "GET",
                "id": "getOrder",
                "short_descr": "Fetch",
                "description": "Fetch one order",
                "parameters": []
            },
            "del": {
                "url": "/orders/{id}",
                "method": "DELETE",
                "id": "deleteOrder",
                "short_descr": "Delete",
                "description": "Delete one order",
                "parameters": []
            }
        }
    }"#;

    let flow = FlowDocument::from_json(flow_json).unwrap();
    let yaml = convert(&flow).to_yaml().unwrap();

    // Both methods survive under the shared path once reparsed.
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    let path_item = &value["paths"]["/orders/{id}"];
    assert_eq!(path_item["get"]["operationId"], "getOrder");
    assert_eq!(path_item["delete"]["operationId"], "deleteOrder");
}
