/*!
# Expressions and Types

There are two types: whole numbers and strings. Numbers are 32-bit
signed integers, or 16-bit when built with the `int16` feature. There
are no fractions; division drops the remainder. A result that doesn't
fit is an `ARITHMETIC OVERFLOW`.

Variable names start with a letter and go on with letters and digits,
up to 62 characters. A string variable ends with `$`. An array is
used with a subscript after its name and must be declared with `DIM`.

```text
LET COUNT=10
NAME$="CAT"
DIM A(5)
A(2)=COUNT
```

Strings are written between quotes and can't contain a quote.

## Operators

From the tightest binding to the loosest.

| Operator | |
|---|---|
| `**` | Power |
| `-` | Negation |
| `*` | Multiplication |
| `/` | Division |
| `+` `-` | Addition and subtraction |
| `=` `<` `>` `<=` `>=` `<>` | Comparisons |
| `NOT` | Bitwise not |
| `AND` | Bitwise and |
| `OR` | Bitwise or |

Comparisons give -1 for true and 0 for false. Strings compare with
`=`, `<` and `>` only. Operators of the same priority work left to
right, so `2**3**2` is 64.

Brackets may nest, but not without limit. Too deep is
`OUT OF MEMORY`.

*/
