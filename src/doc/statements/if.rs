/*!
# `IF <expression> THEN <statement>`

## Purpose
Runs a statement when a number isn't zero.

## Remarks
Comparisons give -1 for true and 0 for false. The statement after
`THEN` is any statement, including another `IF`.

## Example
```text
10 INPUT A
20 IF A<0 THEN PRINT "NEGATIVE"
30 IF A>9 THEN IF A<100 THEN PRINT "TWO DIGITS"
```

*/
