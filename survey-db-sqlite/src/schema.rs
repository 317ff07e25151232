///////////////////////////////////////////////////////////////////////
// Survey comments
///////////////////////////////////////////////////////////////////////

table! {
    survey_comment (id) {
        id -> Text,
        user_name -> Text,
        email -> Nullable<Text>,
        usage_without_attachment -> Nullable<Text>,
        usage_with_attachment -> Nullable<Text>,
        department -> Nullable<Text>,
        section -> Nullable<Text>,
        remark -> Nullable<Text>,
        is_deleted -> Bool,
        created_at -> BigInt,
        created_offset -> Integer,
        updated_at -> Nullable<BigInt>,
        updated_offset -> Nullable<Integer>,
    }
}
