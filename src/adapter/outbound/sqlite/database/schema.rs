// Mirrors schema/schema.sql.

diesel::table! {
    service_records (id) {
        id -> Integer,
        vin -> Text,
        customer_name -> Text,
        service_date -> Text,
        description -> Text,
        mechanic -> Text,
    }
}

diesel::table! {
    mechanics (id) {
        id -> Integer,
        name -> Text,
        skill -> Text,
        active -> Bool,
    }
}

diesel::table! {
    appointments (id) {
        id -> Integer,
        vin -> Text,
        customer_name -> Text,
        scheduled_at -> Text,
        status -> Text,
    }
}

diesel::table! {
    assignments (id) {
        id -> Integer,
        appointment_id -> Integer,
        mechanic_id -> Integer,
        assigned_at -> Text,
        completed_at -> Nullable<Text>,
    }
}

diesel::table! {
    users (id) {
        id -> Integer,
        username -> Text,
        password_hash -> Text,
        salt -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    appointments,
    assignments,
    mechanics,
    service_records,
    users,
);
