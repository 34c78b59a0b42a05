mod value_type;
